use serde::{Deserialize, Serialize};

/// Navigation requests. Paths are the client-side route strings, so a
/// message carries exactly what a menu item or link would push onto the
/// browser history in the hosted UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteMsg {
    Navigate(String),
}
