use std::sync::Mutex;

use crate::domain::auth::{AuthError, Credentials, Registration, Session};

/// The authentication collaborator the forms submit against. The real
/// system lives behind an API; this application injects a local demo
/// implementation so views stay pure and testable.
pub trait AuthService: Send + Sync {
    fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;
    fn sign_up(&self, registration: &Registration) -> Result<Session, AuthError>;
}

/// Demo implementation: any validated input yields a session. The display
/// name is derived from the email local part.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAuthService;

impl LocalAuthService {
    pub fn new() -> Self {
        Self
    }

    fn name_from_email(email: &str) -> String {
        let local = email.split('@').next().unwrap_or(email);
        let mut chars = local.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => local.to_string(),
        }
    }
}

impl AuthService for LocalAuthService {
    fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(Session {
            name: Self::name_from_email(credentials.email.trim()),
            email: credentials.email.trim().to_string(),
            source: None,
        })
    }

    fn sign_up(&self, registration: &Registration) -> Result<Session, AuthError> {
        if registration.email.trim().is_empty() || registration.password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        let name = if registration.name.trim().is_empty() {
            Self::name_from_email(registration.email.trim())
        } else {
            registration.name.trim().to_string()
        };
        Ok(Session {
            name,
            email: registration.email.trim().to_string(),
            source: None,
        })
    }
}

/// A call observed by [`RecordingAuthService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCall {
    SignIn(Credentials),
    SignUp(Registration),
}

/// Test-oriented implementation: records every call and answers with a
/// preconfigured result.
pub struct RecordingAuthService {
    calls: Mutex<Vec<AuthCall>>,
    response: Result<Session, AuthError>,
}

impl RecordingAuthService {
    pub fn new(response: Result<Session, AuthError>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response,
        }
    }

    /// Accepts everything with a fixed demo session.
    pub fn accepting() -> Self {
        Self::new(Ok(Session {
            name: "Jack".to_string(),
            email: "jack@openmesh.app".to_string(),
            source: None,
        }))
    }

    /// Rejects everything with the given error.
    pub fn rejecting(error: AuthError) -> Self {
        Self::new(Err(error))
    }

    pub fn calls(&self) -> Vec<AuthCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }

    fn record(&self, call: AuthCall) -> Result<Session, AuthError> {
        self.calls.lock().expect("calls lock").push(call);
        self.response.clone()
    }
}

impl AuthService for RecordingAuthService {
    fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        self.record(AuthCall::SignIn(credentials.clone()))
    }

    fn sign_up(&self, registration: &Registration) -> Result<Session, AuthError> {
        self.record(AuthCall::SignUp(registration.clone()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_local_service_derives_the_display_name() {
        let session = LocalAuthService::new()
            .sign_in(&Credentials {
                email: "jack@openmesh.app".into(),
                password: "hunter2".into(),
            })
            .expect("signs in");
        assert_eq!(session.name, "Jack");
        assert_eq!(session.email, "jack@openmesh.app");
    }

    #[test]
    fn test_local_service_rejects_empty_credentials() {
        let result = LocalAuthService::new().sign_in(&Credentials {
            email: String::new(),
            password: String::new(),
        });
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_recording_service_counts_calls() {
        let service = RecordingAuthService::rejecting(AuthError::Unauthorized);
        let result = service.sign_in(&Credentials {
            email: "jack@openmesh.app".into(),
            password: "hunter2".into(),
        });
        assert_eq!(result, Err(AuthError::Unauthorized));
        assert_eq!(service.call_count(), 1);
    }
}
