use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd_executor::CmdExecutor, msg::Msg, raw_msg::RawMsg, state::AppState,
        translator::translate_raw_to_domain, update::update,
    },
    infrastructure::{
        auth_service::AuthService,
        config::Config,
        provider_gateway::ProviderGateway,
        tui::{Event, TuiLike},
    },
    presentation::components::Components,
};

/// Drives the update loop against an injected terminal implementation.
///
/// The terminal is a trait object so tests can run the full loop against a
/// test backend; the capability services are injected the same way.
pub struct AppRunner {
    state: AppState,
    components: Components,
    tui: Box<dyn TuiLike>,
    executor: CmdExecutor,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
}

impl AppRunner {
    pub fn new(
        config: Config,
        tui: Box<dyn TuiLike>,
        auth: Arc<dyn AuthService>,
        gateway: Arc<dyn ProviderGateway>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let executor = CmdExecutor::new(msg_tx, auth, gateway);
        Self {
            state: AppState::new(config),
            components: Components::new(),
            tui,
            executor,
            msg_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main loop until the event stream closes or a quit is
    /// requested.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        loop {
            let Some(event) = self.tui.next().await else {
                break;
            };

            match event {
                Event::Quit => self.dispatch_raw(RawMsg::Quit)?,
                Event::Tick => self.dispatch_raw(RawMsg::Tick)?,
                Event::Init | Event::Render => self.draw()?,
                Event::Resize(w, h) => {
                    self.tui.resize(ratatui::prelude::Rect::new(0, 0, w, h))?;
                    self.draw()?;
                }
                Event::Key(key) => self.dispatch_raw(RawMsg::Key(key))?,
                Event::Paste(s) => self.dispatch_raw(RawMsg::Paste(s))?,
                Event::Error => {
                    self.dispatch_raw(RawMsg::Error("terminal event stream error".into()))?
                }
                Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Closed => {}
            }

            // Results from executed commands arrive asynchronously.
            self.drain_messages()?;

            if self.state.system.should_suspend {
                self.tui.suspend()?;
                self.dispatch_raw(RawMsg::Resume)?;
                self.tui.enter()?;
            }
            if self.state.system.should_quit {
                break;
            }
        }

        self.tui.exit()
    }

    /// Translate a raw event and dispatch the resulting messages.
    pub fn dispatch_raw(&mut self, raw: RawMsg) -> Result<()> {
        if !raw.is_frequent() {
            tracing::trace!(?raw, "raw event");
        }
        for msg in translate_raw_to_domain(raw, &self.state) {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    /// Run one message through the pure update function and execute the
    /// produced commands.
    pub fn dispatch(&mut self, msg: Msg) -> Result<()> {
        let (state, commands) = update(msg, std::mem::take(&mut self.state));
        self.state = state;
        self.executor.execute_all(commands)?;
        Ok(())
    }

    /// Dispatch every queued command result.
    pub fn drain_messages(&mut self) -> Result<()> {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    pub fn draw(&mut self) -> Result<()> {
        let Self {
            tui,
            components,
            state,
            ..
        } = self;
        tui.draw(&mut |frame| components.render(frame, state))?;
        Ok(())
    }
}
