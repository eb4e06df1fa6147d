//! # Bookdash - Booking Dashboard TUI
//!
//! A terminal rendition of the OpenMesh booking dashboard: sign-in and
//! sign-up views, a persistent layout shell with a side menu, and a
//! statistics dashboard charting the recent-bookings sample dataset.
//! Built with an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** ([`core::state::AppState`]): all application state
//! - **Message** ([`core::msg::Msg`]): events that can change the state
//! - **Update** ([`core::update::update`]): pure state transitions
//! - **Command** ([`core::cmd::Cmd`]): side effects, executed by the host
//!   against injected capability services
//! - **View** ([`presentation::components`]): stateless rendering from state
//!
//! Raw terminal events are turned into domain messages by the pure
//! [`core::translator::translate_raw_to_domain`], so the whole input path
//! can be tested without a terminal.

#![deny(warnings)]
#![allow(dead_code)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
