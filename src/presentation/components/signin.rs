//! Sign-in view
//!
//! A centered card with the email and password fields, the submit button,
//! the provider row and inline error feedback. Rendering an untouched form
//! shows no errors at all.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::auth::SigninFocus;
use crate::core::state::AppState;
use crate::domain::auth::Provider;
use crate::presentation::widgets::TextFieldWidget;

const CARD_WIDTH: u16 = 46;
const CARD_HEIGHT: u16 = 18;

#[derive(Debug, Clone)]
pub struct SigninComponent;

impl SigninComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let theme = &state.config.theme;
        let form = &state.signin;
        let card = centered_card(area, CARD_WIDTH, CARD_HEIGHT);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted))
            .title(Span::styled(
                " Sign in ",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(card);
        frame.render_widget(Clear, card);
        frame.render_widget(block, card);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(3), // email
                Constraint::Length(3), // password
                Constraint::Length(1), // submit
                Constraint::Length(1),
                Constraint::Length(1), // divider
                Constraint::Length(1), // providers
                Constraint::Length(1),
                Constraint::Length(1), // auth error
                Constraint::Min(0),    // hint
            ])
            .split(inner);

        let email = TextFieldWidget::new("Email", &form.email, theme)
            .focused(form.focus == SigninFocus::Email)
            .error(form.error_for("email"));
        frame.render_widget(email, rows[0]);

        let password = TextFieldWidget::new("Password", &form.password, theme)
            .focused(form.focus == SigninFocus::Password)
            .masked(true)
            .error(form.error_for("password"));
        frame.render_widget(password, rows[1]);

        frame.render_widget(
            button("[ Sign in ]", form.focus == SigninFocus::Submit, theme),
            rows[2],
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Or continue with",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center),
            rows[4],
        );
        frame.render_widget(self.provider_row(state), rows[5]);

        if let Some(error) = &form.auth_error {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    error.to_string(),
                    Style::default().fg(theme.error),
                )),
                rows[7],
            );
        }

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Ctrl+S to create an account",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center),
            rows[8],
        );
    }

    fn provider_row<'a>(&self, state: &'a AppState) -> Paragraph<'a> {
        let theme = &state.config.theme;
        let focus = state.signin.focus;
        let mut spans = Vec::new();
        for provider in [Provider::Google, Provider::GitHub, Provider::Twitter] {
            let focused = focus.provider() == Some(provider);
            let style = if focused {
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(theme.fg)
            };
            spans.push(Span::styled(format!("[ {} ]", provider.label()), style));
            spans.push(Span::raw("  "));
        }
        spans.pop();
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for SigninComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// A one-line button, reversed while focused.
pub(crate) fn button<'a>(
    label: &'a str,
    focused: bool,
    theme: &crate::presentation::config::styles::Theme,
) -> Paragraph<'a> {
    let style = if focused {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().fg(theme.primary)
    };
    Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center)
}

/// The largest `width` x `height` rect centered in `area`.
pub(crate) fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::domain::auth::AuthError;
    use crate::domain::validation::ValidationError;

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("terminal");
        let signin = SigninComponent::new();
        terminal
            .draw(|frame| signin.view(state, frame, frame.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_untouched_form_renders_without_errors() {
        let state = AppState::default();
        let text = render(&state);
        assert!(text.contains("Sign in"));
        assert!(text.contains("Email"));
        assert!(text.contains("Password"));
        assert!(text.contains("GitHub"));
        assert!(!text.contains("required"));
    }

    #[test]
    fn test_validation_errors_are_shown_inline() {
        let mut state = AppState::default();
        state.signin.errors = vec![
            ValidationError::new("email", "Please input your email!"),
            ValidationError::new("password", "Please input your password!"),
        ];
        let text = render(&state);
        assert!(text.contains("Please input your email!"));
        assert!(text.contains("Please input your password!"));
    }

    #[test]
    fn test_auth_error_is_shown() {
        let mut state = AppState::default();
        state.signin.auth_error = Some(AuthError::InvalidCredentials);
        let text = render(&state);
        assert!(text.contains(&AuthError::InvalidCredentials.to_string()));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).expect("terminal");
        let state = AppState::default();
        let signin = SigninComponent::new();
        terminal
            .draw(|frame| signin.view(&state, frame, frame.area()))
            .expect("draw");
    }
}
