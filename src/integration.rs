//! Host loop
//!
//! Wires the terminal, the pure core and the capability services together.

pub mod app_runner;

pub use app_runner::AppRunner;
