//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.
//! The collection dispatches on the current route: auth views own the whole
//! frame, every other route renders inside the layout shell.

use ratatui::prelude::*;

use crate::core::state::AppState;
use crate::domain::nav::Route;

pub mod dashboard;
pub mod not_found;
pub mod placeholder;
pub mod shell;
pub mod signin;
pub mod signup;

pub use dashboard::DashboardComponent;
pub use not_found::NotFoundComponent;
pub use placeholder::PlaceholderComponent;
pub use shell::ShellComponent;
pub use signin::SigninComponent;
pub use signup::SignupComponent;

/// Collection of all components
pub struct Components {
    pub shell: ShellComponent,
    pub signin: SigninComponent,
    pub signup: SignupComponent,
    pub dashboard: DashboardComponent,
    pub placeholder: PlaceholderComponent,
    pub not_found: NotFoundComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            shell: ShellComponent::new(),
            signin: SigninComponent::new(),
            signup: SignupComponent::new(),
            dashboard: DashboardComponent::new(),
            placeholder: PlaceholderComponent::new(),
            not_found: NotFoundComponent::new(),
        }
    }

    /// Main rendering entry point.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        match state.route.current {
            Route::Signin => self.signin.view(state, frame, area),
            Route::Signup => self.signup.view(state, frame, area),
            route => {
                let content = self.shell.view(state, frame, area);
                match route {
                    Route::Dashboard => self.dashboard.view(state, frame, content),
                    Route::Bookings => self.placeholder.view(state, frame, content, "Bookings"),
                    Route::Resources => self.placeholder.view(state, frame, content, "Resources"),
                    Route::Settings => self.placeholder.view(state, frame, content, "Settings"),
                    _ => self.not_found.view(state, frame, content),
                }
            }
        }
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
