use crate::core::msg::InputEdit;
use crate::core::state::input::TextField;
use crate::domain::auth::{AuthError, Credentials, Provider, Registration};
use crate::domain::validation::ValidationError;

/// Focus order on the sign-in view: fields, submit, then the provider row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SigninFocus {
    #[default]
    Email,
    Password,
    Submit,
    Google,
    GitHub,
    Twitter,
}

impl SigninFocus {
    pub fn next(self) -> Self {
        match self {
            SigninFocus::Email => SigninFocus::Password,
            SigninFocus::Password => SigninFocus::Submit,
            SigninFocus::Submit => SigninFocus::Google,
            SigninFocus::Google => SigninFocus::GitHub,
            SigninFocus::GitHub => SigninFocus::Twitter,
            SigninFocus::Twitter => SigninFocus::Email,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SigninFocus::Email => SigninFocus::Twitter,
            SigninFocus::Password => SigninFocus::Email,
            SigninFocus::Submit => SigninFocus::Password,
            SigninFocus::Google => SigninFocus::Submit,
            SigninFocus::GitHub => SigninFocus::Google,
            SigninFocus::Twitter => SigninFocus::GitHub,
        }
    }

    pub fn provider(self) -> Option<Provider> {
        match self {
            SigninFocus::Google => Some(Provider::Google),
            SigninFocus::GitHub => Some(Provider::GitHub),
            SigninFocus::Twitter => Some(Provider::Twitter),
            _ => None,
        }
    }

    pub fn is_field(self) -> bool {
        matches!(self, SigninFocus::Email | SigninFocus::Password)
    }
}

/// Sign-in form state.
#[derive(Debug, Clone, Default)]
pub struct SigninForm {
    pub email: TextField,
    pub password: TextField,
    pub focus: SigninFocus,
    pub errors: Vec<ValidationError>,
    pub auth_error: Option<AuthError>,
}

impl SigninForm {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.value.clone(),
            password: self.password.value.clone(),
        }
    }

    pub fn edit_focused(&mut self, edit: InputEdit) {
        match self.focus {
            SigninFocus::Email => self.email.apply(edit),
            SigninFocus::Password => self.password.apply(edit),
            _ => {}
        }
        self.clear_feedback();
    }

    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.reason.as_str())
    }

    pub fn clear_feedback(&mut self) {
        self.errors.clear();
        self.auth_error = None;
    }
}

/// Focus order on the sign-up view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignupFocus {
    #[default]
    Name,
    Email,
    Password,
    Confirm,
    Submit,
}

impl SignupFocus {
    pub fn next(self) -> Self {
        match self {
            SignupFocus::Name => SignupFocus::Email,
            SignupFocus::Email => SignupFocus::Password,
            SignupFocus::Password => SignupFocus::Confirm,
            SignupFocus::Confirm => SignupFocus::Submit,
            SignupFocus::Submit => SignupFocus::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SignupFocus::Name => SignupFocus::Submit,
            SignupFocus::Email => SignupFocus::Name,
            SignupFocus::Password => SignupFocus::Email,
            SignupFocus::Confirm => SignupFocus::Password,
            SignupFocus::Submit => SignupFocus::Confirm,
        }
    }

    pub fn is_field(self) -> bool {
        !matches!(self, SignupFocus::Submit)
    }
}

/// Sign-up form state. The confirm field is view-local and never leaves
/// this struct.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: TextField,
    pub email: TextField,
    pub password: TextField,
    pub confirm: TextField,
    pub focus: SignupFocus,
    pub errors: Vec<ValidationError>,
    pub auth_error: Option<AuthError>,
}

impl SignupForm {
    pub fn registration(&self) -> Registration {
        Registration {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            password: self.password.value.clone(),
        }
    }

    pub fn edit_focused(&mut self, edit: InputEdit) {
        match self.focus {
            SignupFocus::Name => self.name.apply(edit),
            SignupFocus::Email => self.email.apply(edit),
            SignupFocus::Password => self.password.apply(edit),
            SignupFocus::Confirm => self.confirm.apply(edit),
            SignupFocus::Submit => {}
        }
        self.clear_feedback();
    }

    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.reason.as_str())
    }

    pub fn clear_feedback(&mut self) {
        self.errors.clear();
        self.auth_error = None;
    }
}
