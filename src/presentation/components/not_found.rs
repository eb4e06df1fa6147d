//! Fallback view for unknown paths.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Clone)]
pub struct NotFoundComponent;

impl NotFoundComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let theme = &state.config.theme;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "404",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                "The page you visited does not exist.",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center),
            rows[2],
        );
    }
}

impl Default for NotFoundComponent {
    fn default() -> Self {
        Self::new()
    }
}
