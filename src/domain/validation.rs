use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::auth::{Credentials, Registration};

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

/// A parameter-specific issue surfaced on a form, mirroring the booking
/// API's validation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The property that the validation error has occurred for.
    pub name: String,
    /// A description of the reason that the validation error has occurred.
    pub reason: String,
}

impl ValidationError {
    pub fn new(name: &str, reason: &str) -> Self {
        Self {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

fn require(errs: &mut Vec<ValidationError>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errs.push(ValidationError::new(name, "This field is required"));
    }
}

fn require_email(errs: &mut Vec<ValidationError>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errs.push(ValidationError::new(name, "This field is required"));
    } else if !EMAIL_RE.is_match(value.trim()) {
        errs.push(ValidationError::new(name, "Enter a valid email address"));
    }
}

/// Validate sign-in input. Returns one error per failed requirement.
pub fn validate_signin(credentials: &Credentials) -> Vec<ValidationError> {
    let mut errs = Vec::new();
    require_email(&mut errs, "email", &credentials.email);
    require(&mut errs, "password", &credentials.password);
    errs
}

/// Validate sign-up input, including the confirm-password field which is
/// view-local and not part of [`Registration`].
pub fn validate_signup(registration: &Registration, confirm: &str) -> Vec<ValidationError> {
    let mut errs = Vec::new();
    require(&mut errs, "name", &registration.name);
    require_email(&mut errs, "email", &registration.email);
    require(&mut errs, "password", &registration.password);
    if !registration.password.is_empty() && registration.password != confirm {
        errs.push(ValidationError::new("confirm", "Passwords do not match"));
    }
    errs
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_empty_signin_yields_one_error_per_field() {
        let errs = validate_signin(&credentials("", ""));
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].name, "email");
        assert_eq!(errs[1].name, "password");
    }

    #[rstest]
    #[case("jack")]
    #[case("jack@")]
    #[case("jack@openmesh")]
    #[case("jack openmesh@app.com")]
    fn test_malformed_email_is_rejected(#[case] email: &str) {
        let errs = validate_signin(&credentials(email, "hunter2"));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].name, "email");
        assert_eq!(errs[0].reason, "Enter a valid email address");
    }

    #[test]
    fn test_valid_signin_passes() {
        assert!(validate_signin(&credentials("jack@openmesh.app", "hunter2")).is_empty());
    }

    #[test]
    fn test_signup_password_mismatch() {
        let registration = Registration {
            name: "Jack".into(),
            email: "jack@openmesh.app".into(),
            password: "hunter2".into(),
        };
        let errs = validate_signup(&registration, "hunter3");
        assert_eq!(errs, vec![ValidationError::new("confirm", "Passwords do not match")]);
        assert!(validate_signup(&registration, "hunter2").is_empty());
    }
}
