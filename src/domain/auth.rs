use serde::{Deserialize, Serialize};
use strum::Display;

/// OAuth providers offered on the sign-in view. Only GitHub is wired to a
/// navigation; the others render without handlers, as in the hosted UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    Google,
    GitHub,
    Twitter,
}

impl Provider {
    /// Client-side path a provider button navigates to, e.g. `/oauth/github`.
    pub fn login_path(&self) -> String {
        format!("/oauth/{self}")
    }

    pub fn is_wired(&self) -> bool {
        matches!(self, Provider::GitHub)
    }

    /// Display casing for buttons, as opposed to the lowercase wire form.
    pub fn label(&self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::GitHub => "GitHub",
            Provider::Twitter => "Twitter",
        }
    }
}

/// Email/password credentials captured by the sign-in form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Payload captured by the sign-up form. The confirm-password field is
/// checked by validation and never leaves the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// An authenticated session as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub email: String,
    pub source: Option<Provider>,
}

impl Session {
    /// Single glyph shown in the header avatar.
    pub fn avatar_initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// Authentication failures surfaced to the form. Codes mirror the booking
/// API's error taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthError {
    InvalidCredentials,
    Unauthorized,
    NotFound,
    NotImplemented,
    Internal(String),
}

impl AuthError {
    /// Machine-readable error code, matching the booking API.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid",
            AuthError::Unauthorized => "unauthorized",
            AuthError::NotFound => "not_found",
            AuthError::NotImplemented => "not_implemented",
            AuthError::Internal(_) => "internal",
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::Unauthorized => write!(f, "You are not authorized to sign in"),
            AuthError::NotFound => write!(f, "No account found for that email"),
            AuthError::NotImplemented => write!(f, "That sign-in method is not available"),
            AuthError::Internal(_) => write!(f, "Internal error"),
        }
    }
}

impl std::error::Error for AuthError {}
