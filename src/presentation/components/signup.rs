//! Sign-up view

use ratatui::{prelude::*, widgets::*};

use crate::core::state::auth::SignupFocus;
use crate::core::state::AppState;
use crate::presentation::components::signin::{button, centered_card};
use crate::presentation::widgets::TextFieldWidget;

const CARD_WIDTH: u16 = 46;
const CARD_HEIGHT: u16 = 20;

#[derive(Debug, Clone)]
pub struct SignupComponent;

impl SignupComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let theme = &state.config.theme;
        let form = &state.signup;
        let card = centered_card(area, CARD_WIDTH, CARD_HEIGHT);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted))
            .title(Span::styled(
                " Create your account ",
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
                Constraint::Length(3), // name
                Constraint::Length(3), // email
                Constraint::Length(3), // password
                Constraint::Length(3), // confirm
                Constraint::Length(1), // submit
                Constraint::Length(1), // auth error
                Constraint::Min(0),    // hint
            ])
            .split(inner);

        let name = TextFieldWidget::new("Name", &form.name, theme)
            .focused(form.focus == SignupFocus::Name)
            .error(form.error_for("name"));
        frame.render_widget(name, rows[0]);

        let email = TextFieldWidget::new("Email", &form.email, theme)
            .focused(form.focus == SignupFocus::Email)
            .error(form.error_for("email"));
        frame.render_widget(email, rows[1]);

        let password = TextFieldWidget::new("Password", &form.password, theme)
            .focused(form.focus == SignupFocus::Password)
            .masked(true)
            .error(form.error_for("password"));
        frame.render_widget(password, rows[2]);

        let confirm = TextFieldWidget::new("Confirm password", &form.confirm, theme)
            .focused(form.focus == SignupFocus::Confirm)
            .masked(true)
            .error(form.error_for("confirm"));
        frame.render_widget(confirm, rows[3]);

        frame.render_widget(
            button("[ Sign up ]", form.focus == SignupFocus::Submit, theme),
            rows[4],
        );

        if let Some(error) = &form.auth_error {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    error.to_string(),
                    Style::default().fg(theme.error),
                )),
                rows[5],
            );
        }

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Esc to go back to sign in",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center),
            rows[6],
        );
    }
}

impl Default for SignupComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::domain::validation::ValidationError;

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("terminal");
        let signup = SignupComponent::new();
        terminal
            .draw(|frame| signup.view(state, frame, frame.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_all_four_fields() {
        let state = AppState::default();
        let text = render(&state);
        assert!(text.contains("Create your account"));
        assert!(text.contains("Name"));
        assert!(text.contains("Email"));
        assert!(text.contains("Password"));
        assert!(text.contains("Confirm password"));
        assert!(text.contains("[ Sign up ]"));
    }

    #[test]
    fn test_confirm_mismatch_error_is_shown() {
        let mut state = AppState::default();
        state.signup.errors = vec![ValidationError::new("confirm", "Passwords do not match")];
        let text = render(&state);
        assert!(text.contains("Passwords do not match"));
    }
}
