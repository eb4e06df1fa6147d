//! Infrastructure layer
//!
//! Terminal backend, configuration loading, and the capability services
//! (authentication, provider navigation) injected into the command
//! executor.

pub mod auth_service;
pub mod cli;
pub mod config;
pub mod provider_gateway;
pub mod tui;
