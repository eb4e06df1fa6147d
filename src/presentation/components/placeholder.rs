//! Placeholder for routes that exist in the menu but have no content yet.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Clone)]
pub struct PlaceholderComponent;

impl PlaceholderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect, title: &str) {
        let theme = &state.config.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted))
            .title(Span::styled(
                format!(" {title} "),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Nothing here yet.",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center),
            inner,
        );
    }
}

impl Default for PlaceholderComponent {
    fn default() -> Self {
        Self::new()
    }
}
