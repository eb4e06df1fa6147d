use crate::{
    core::cmd::Cmd,
    core::msg::{auth::AuthMsg, route::RouteMsg, shell::ShellMsg, system::SystemMsg, Msg},
    core::state::AppState,
    domain::auth::{AuthError, Session},
    domain::nav::{nav_index_of, nav_items, Route},
    domain::validation::{validate_signin, validate_signup},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Navigation: route change plus menu-cursor sync
        Msg::Route(RouteMsg::Navigate(path)) => {
            navigate(&mut state, &path);
            (state, vec![])
        }

        // Shell messages; MenuSelect is cross-cutting and navigates
        Msg::Shell(ShellMsg::MenuSelect) => {
            let target = nav_items()
                .get(state.shell.menu_cursor)
                .map(|item| item.route.path());
            if let Some(path) = target {
                navigate(&mut state, path);
            }
            (state, vec![])
        }
        Msg::Shell(shell_msg) => {
            let commands = state.shell.update(shell_msg);
            (state, commands)
        }

        // Dashboard messages (delegated to DashboardState)
        Msg::Dashboard(dashboard_msg) => {
            let commands = state.dashboard.update(dashboard_msg);
            (state, commands)
        }

        // Form messages
        Msg::Auth(auth_msg) => update_auth(auth_msg, state),
    }
}

fn navigate(state: &mut AppState, path: &str) {
    let previous = state.route.current;
    let route = state.route.navigate(path);
    if route != previous {
        log::info!("navigate: {path} -> {route}");
    }
    // Keep the menu cursor on the item for the current route so the shell
    // opens with the selection under the cursor.
    if let Some(index) = nav_index_of(route) {
        state.shell.menu_cursor = index;
    }
}

fn update_auth(msg: AuthMsg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        AuthMsg::SigninEdit(edit) => {
            state.signin.edit_focused(edit);
            (state, vec![])
        }
        AuthMsg::SigninFocusNext => {
            state.signin.focus = state.signin.focus.next();
            (state, vec![])
        }
        AuthMsg::SigninFocusPrev => {
            state.signin.focus = state.signin.focus.prev();
            (state, vec![])
        }
        AuthMsg::SigninActivate => {
            if let Some(provider) = state.signin.focus.provider() {
                let commands = if provider.is_wired() {
                    vec![Cmd::OpenProvider(provider)]
                } else {
                    // Renders without a handler in the hosted UI; keep it a no-op.
                    log::debug!("provider button not wired: {provider}");
                    vec![]
                };
                return (state, commands);
            }
            let credentials = state.signin.credentials();
            let errors = validate_signin(&credentials);
            if errors.is_empty() {
                state.signin.clear_feedback();
                (state, vec![Cmd::SignIn(credentials)])
            } else {
                state.signin.errors = errors;
                (state, vec![])
            }
        }

        AuthMsg::SignupEdit(edit) => {
            state.signup.edit_focused(edit);
            (state, vec![])
        }
        AuthMsg::SignupFocusNext => {
            state.signup.focus = state.signup.focus.next();
            (state, vec![])
        }
        AuthMsg::SignupFocusPrev => {
            state.signup.focus = state.signup.focus.prev();
            (state, vec![])
        }
        AuthMsg::SignupActivate => {
            let registration = state.signup.registration();
            let errors = validate_signup(&registration, &state.signup.confirm.value);
            if errors.is_empty() {
                state.signup.clear_feedback();
                (state, vec![Cmd::SignUp(registration)])
            } else {
                state.signup.errors = errors;
                (state, vec![])
            }
        }

        AuthMsg::SignInCompleted(result) => complete_auth(result, state, FormKind::Signin),
        AuthMsg::SignUpCompleted(result) => complete_auth(result, state, FormKind::Signup),
    }
}

enum FormKind {
    Signin,
    Signup,
}

fn complete_auth(
    result: Result<Session, AuthError>,
    mut state: AppState,
    form: FormKind,
) -> (AppState, Vec<Cmd>) {
    match result {
        Ok(session) => {
            state
                .system
                .update(SystemMsg::UpdateStatusMessage(format!(
                    "Signed in as {}",
                    session.name
                )));
            state.session.current = Some(session);
            // Drop captured credentials once a session exists.
            state.signin = Default::default();
            state.signup = Default::default();
            navigate(&mut state, Route::Dashboard.path());
            (state, vec![])
        }
        Err(error) => {
            let message = error.to_string();
            match form {
                FormKind::Signin => state.signin.auth_error = Some(error),
                FormKind::Signup => state.signup.auth_error = Some(error),
            }
            (state, vec![Cmd::LogError { message }])
        }
    }
}
