use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            auth::AuthMsg, dashboard::DashboardMsg, route::RouteMsg, shell::ShellMsg,
            system::SystemMsg, InputEdit, Msg,
        },
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::nav::{Mode, Route},
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Frequent events and terminal concerns handled by the host loop
        RawMsg::Tick | RawMsg::Render | RawMsg::Resize(_, _) | RawMsg::Paste(_) => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    match state.mode() {
        Mode::Signin => translate_signin_keys(key, state),
        Mode::Signup => translate_signup_keys(key, state),
        Mode::Shell => {
            if state.shell.search_focused {
                translate_search_keys(key)
            } else {
                translate_bound_keys(key, state)
            }
        }
    }
}

/// Keys on the sign-in view: focus cycling, activation and field editing
/// first, configured bindings for everything else.
fn translate_signin_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key.code {
        KeyCode::Tab => return vec![Msg::Auth(AuthMsg::SigninFocusNext)],
        KeyCode::BackTab => return vec![Msg::Auth(AuthMsg::SigninFocusPrev)],
        KeyCode::Enter => return vec![Msg::Auth(AuthMsg::SigninActivate)],
        KeyCode::Down => return vec![Msg::Auth(AuthMsg::SigninFocusNext)],
        KeyCode::Up => return vec![Msg::Auth(AuthMsg::SigninFocusPrev)],
        _ => {}
    }
    if state.signin.focus.is_field() {
        if let Some(edit) = field_edit(key) {
            return vec![Msg::Auth(AuthMsg::SigninEdit(edit))];
        }
    }
    translate_bound_keys(key, state)
}

fn translate_signup_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key.code {
        KeyCode::Tab => return vec![Msg::Auth(AuthMsg::SignupFocusNext)],
        KeyCode::BackTab => return vec![Msg::Auth(AuthMsg::SignupFocusPrev)],
        KeyCode::Enter => return vec![Msg::Auth(AuthMsg::SignupActivate)],
        KeyCode::Down => return vec![Msg::Auth(AuthMsg::SignupFocusNext)],
        KeyCode::Up => return vec![Msg::Auth(AuthMsg::SignupFocusPrev)],
        _ => {}
    }
    if state.signup.focus.is_field() {
        if let Some(edit) = field_edit(key) {
            return vec![Msg::Auth(AuthMsg::SignupEdit(edit))];
        }
    }
    translate_bound_keys(key, state)
}

/// Keys while the header search field has focus: it captures printable
/// input; Esc and Enter give focus back to the shell.
fn translate_search_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => return vec![Msg::Shell(ShellMsg::BlurSearch)],
        _ => {}
    }
    match field_edit(key) {
        Some(edit) => vec![Msg::Shell(ShellMsg::EditSearch(edit))],
        None => vec![],
    }
}

/// An editing message for the focused text field, if the key is one.
fn field_edit(key: KeyEvent) -> Option<InputEdit> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(InputEdit::Insert(c))
        }
        KeyCode::Backspace => Some(InputEdit::Backspace),
        KeyCode::Delete => Some(InputEdit::Delete),
        KeyCode::Left => Some(InputEdit::CursorLeft),
        KeyCode::Right => Some(InputEdit::CursorRight),
        KeyCode::Home => Some(InputEdit::CursorStart),
        KeyCode::End => Some(InputEdit::CursorEnd),
        _ => None,
    }
}

/// Configured key bindings for the current mode.
fn translate_bound_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let bindings = &state.config.config.keybindings;
    if let Some(action) = bindings
        .get(&state.mode())
        .and_then(|keymap| keymap.get(&vec![key]))
    {
        return translate_action_to_msg(action, state);
    }
    vec![]
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::Navigate(path) => vec![Msg::Route(RouteMsg::Navigate(path.clone()))],
        Action::MenuUp => vec![Msg::Shell(ShellMsg::MenuUp)],
        Action::MenuDown => vec![Msg::Shell(ShellMsg::MenuDown)],
        Action::MenuSelect => vec![Msg::Shell(ShellMsg::MenuSelect)],
        Action::ToggleSider => vec![Msg::Shell(ShellMsg::ToggleSider)],
        Action::FocusSearch => vec![Msg::Shell(ShellMsg::FocusSearch)],
        // Point hovering only applies on the dashboard
        Action::NextPoint if state.route.current == Route::Dashboard => {
            vec![Msg::Dashboard(DashboardMsg::NextPoint)]
        }
        Action::PrevPoint if state.route.current == Route::Dashboard => {
            vec![Msg::Dashboard(DashboardMsg::PrevPoint)]
        }
        Action::Deselect if state.route.current == Route::Dashboard => {
            vec![Msg::Dashboard(DashboardMsg::Deselect)]
        }
        Action::NextPoint | Action::PrevPoint | Action::Deselect => vec![],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::config::Config;

    fn state_with_defaults() -> AppState {
        AppState::new(Config::default_config().expect("embedded config parses"))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut state = state_with_defaults();
        for route in [Route::Signin, Route::Signup, Route::Dashboard] {
            state.route.current = route;
            let msgs = translate_key_event(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &state,
            );
            assert_eq!(msgs, vec![Msg::System(SystemMsg::Quit)]);
        }
    }

    #[test]
    fn test_typing_on_signin_edits_the_focused_field() {
        let state = state_with_defaults();
        let msgs = translate_key_event(key(KeyCode::Char('a')), &state);
        assert_eq!(
            msgs,
            vec![Msg::Auth(AuthMsg::SigninEdit(InputEdit::Insert('a')))]
        );
    }

    #[test]
    fn test_q_quits_in_shell_but_types_on_signin() {
        let mut state = state_with_defaults();
        state.route.current = Route::Dashboard;
        assert_eq!(
            translate_key_event(key(KeyCode::Char('q')), &state),
            vec![Msg::System(SystemMsg::Quit)]
        );

        state.route.current = Route::Signin;
        assert_eq!(
            translate_key_event(key(KeyCode::Char('q')), &state),
            vec![Msg::Auth(AuthMsg::SigninEdit(InputEdit::Insert('q')))]
        );
    }

    #[test]
    fn test_point_keys_only_apply_on_dashboard() {
        let mut state = state_with_defaults();
        state.route.current = Route::Dashboard;
        assert_eq!(
            translate_key_event(key(KeyCode::Right), &state),
            vec![Msg::Dashboard(DashboardMsg::NextPoint)]
        );

        state.route.current = Route::Bookings;
        assert_eq!(translate_key_event(key(KeyCode::Right), &state), vec![]);
    }

    #[test]
    fn test_search_captures_typing() {
        let mut state = state_with_defaults();
        state.route.current = Route::Dashboard;
        state.shell.search_focused = true;
        assert_eq!(
            translate_key_event(key(KeyCode::Char('q')), &state),
            vec![Msg::Shell(ShellMsg::EditSearch(InputEdit::Insert('q')))]
        );
        assert_eq!(
            translate_key_event(key(KeyCode::Esc), &state),
            vec![Msg::Shell(ShellMsg::BlurSearch)]
        );
    }
}
