//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components rendered from [`crate::core::state::AppState`]
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
