pub mod auth;
pub mod dashboard;
pub mod input;
pub mod route;
pub mod session;
pub mod shell;
pub mod system;

use crate::domain::nav::Mode;
use crate::infrastructure::config::Config;
use crate::presentation::config::styles::Theme;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub route: route::RouteState,
    pub shell: shell::ShellState,
    pub signin: auth::SigninForm,
    pub signup: auth::SignupForm,
    pub dashboard: dashboard::DashboardState,
    pub session: session::SessionState,
    pub system: system::SystemState,
    pub config: ConfigState,
}

/// Configuration state: the loaded config plus the theme palette resolved
/// once at bootstrap and treated as immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: Config,
    pub theme: Theme,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let theme = Theme::new(&config.theme);
        Self {
            config: ConfigState { config, theme },
            ..Self::default()
        }
    }

    /// Key-binding mode for the current route.
    pub fn mode(&self) -> Mode {
        self.route.current.mode()
    }
}
