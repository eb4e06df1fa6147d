use crate::domain::auth::Session;

/// The signed-in session, if any. Created by a completed sign-in or
/// sign-up and discarded on exit; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub current: Option<Session>,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }
}
