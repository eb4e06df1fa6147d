use serde::{Deserialize, Serialize};

use crate::core::msg::InputEdit;
use crate::domain::auth::{AuthError, Session};

/// Messages for the sign-in and sign-up forms.
///
/// `*Activate` is the Enter action for whatever currently has focus: a
/// field or the submit button submits the form, a provider button triggers
/// its provider. Completion messages carry the result of the injected
/// authentication service back into pure state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AuthMsg {
    SigninEdit(InputEdit),
    SigninFocusNext,
    SigninFocusPrev,
    SigninActivate,

    SignupEdit(InputEdit),
    SignupFocusNext,
    SignupFocusPrev,
    SignupActivate,

    SignInCompleted(Result<Session, AuthError>),
    SignUpCompleted(Result<Session, AuthError>),
}
