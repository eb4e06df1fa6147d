use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::Cmd,
    core::msg::{auth::AuthMsg, system::SystemMsg, Msg},
    infrastructure::{auth_service::AuthService, provider_gateway::ProviderGateway},
};

/// Executes commands against the injected capability services and feeds
/// results back into the update loop as messages.
#[derive(Clone)]
pub struct CmdExecutor {
    msg_tx: mpsc::UnboundedSender<Msg>,
    auth: Arc<dyn AuthService>,
    gateway: Arc<dyn ProviderGateway>,
}

impl CmdExecutor {
    pub fn new(
        msg_tx: mpsc::UnboundedSender<Msg>,
        auth: Arc<dyn AuthService>,
        gateway: Arc<dyn ProviderGateway>,
    ) -> Self {
        Self {
            msg_tx,
            auth,
            gateway,
        }
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::Batch(commands) => {
                for command in commands {
                    self.execute(command)?;
                }
            }

            Cmd::SignIn(credentials) => {
                let result = self.auth.sign_in(credentials);
                self.msg_tx.send(Msg::Auth(AuthMsg::SignInCompleted(result)))?;
            }

            Cmd::SignUp(registration) => {
                let result = self.auth.sign_up(registration);
                self.msg_tx.send(Msg::Auth(AuthMsg::SignUpCompleted(result)))?;
            }

            Cmd::OpenProvider(provider) => {
                let path = provider.login_path();
                log::info!("Opening provider login: {path}");
                if let Err(e) = self.gateway.open(&path) {
                    self.msg_tx.send(Msg::System(SystemMsg::ShowError(format!(
                        "Failed to open {path}: {e}"
                    ))))?;
                }
            }

            Cmd::LogError { message } => log::error!("{message}"),
            Cmd::LogInfo { message } => log::info!("{message}"),
        }
        Ok(())
    }

    /// Execute a batch of commands in order.
    pub fn execute_all(&self, commands: Vec<Cmd>) -> Result<()> {
        for command in commands {
            self.execute(&command)?;
        }
        Ok(())
    }
}
