use serde::{Deserialize, Serialize};

pub mod auth;
pub mod dashboard;
pub mod route;
pub mod shell;
pub mod system;

use auth::AuthMsg;
use dashboard::DashboardMsg;
use route::RouteMsg;
use shell::ShellMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // Navigation (delegated to RouteState, with menu-cursor sync)
    Route(RouteMsg),

    // Layout shell operations (delegated to ShellState)
    Shell(ShellMsg),

    // Sign-in / sign-up form operations
    Auth(AuthMsg),

    // Dashboard chart operations (delegated to DashboardState)
    Dashboard(DashboardMsg),

    // System operations (delegated to SystemState)
    System(SystemMsg),
}

/// A single edit applied to a focused text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEdit {
    Insert(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
}
