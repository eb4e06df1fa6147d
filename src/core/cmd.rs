use serde::{Deserialize, Serialize};

use crate::domain::auth::{Credentials, Provider, Registration};

/// Elm-like command definitions
/// Represents side effects executed by the host against injected services.
/// Commands capture application intent (what to do); the executor decides
/// how, which keeps the update function pure and the services swappable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cmd {
    // Authentication (executed against the AuthService capability)
    SignIn(Credentials),
    SignUp(Registration),

    // External navigation to a provider login path (ProviderGateway)
    OpenProvider(Provider),

    // Logging related
    LogError { message: String },
    LogInfo { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_batch_flattening() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(
            Cmd::batch(vec![Cmd::OpenProvider(Provider::GitHub)]),
            Cmd::OpenProvider(Provider::GitHub)
        );
        assert!(matches!(
            Cmd::batch(vec![Cmd::None, Cmd::None]),
            Cmd::Batch(_)
        ));
    }
}
