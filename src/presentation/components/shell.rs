//! Persistent layout shell
//!
//! Renders the collapsible sider with the logo and menu, the header with
//! the search field and the session avatar, the footer and the status line.
//! Returns the content region left for the hosted route.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;
use crate::presentation::widgets::MenuWidget;

const SIDER_WIDTH: u16 = 24;
const SIDER_WIDTH_COLLAPSED: u16 = 6;
const FOOTER_TEXT: &str = "Booking by OpenMesh ©2021 Created by Jack Caldwell";

#[derive(Debug, Clone)]
pub struct ShellComponent;

impl ShellComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the shell chrome and return the content area.
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) -> Rect {
        let sider_width = if state.shell.sider_collapsed {
            SIDER_WIDTH_COLLAPSED
        } else {
            SIDER_WIDTH
        };
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(sider_width), Constraint::Min(0)])
            .split(area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1), // header
                Constraint::Min(0),    // hosted route
                Constraint::Length(1), // footer
                Constraint::Length(1), // status line
            ])
            .split(columns[1]);

        self.render_sider(state, frame, columns[0]);
        self.render_header(state, frame, rows[0]);
        self.render_footer(state, frame, rows[2]);
        self.render_status(state, frame, rows[3]);

        rows[1]
    }

    fn render_sider(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let theme = &state.config.theme;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1), // logo
                Constraint::Length(1),
                Constraint::Min(0), // menu
            ])
            .split(area);

        let logo = if state.shell.sider_collapsed {
            "⬡"
        } else {
            "⬡ OpenMesh"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                logo,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            rows[0],
        );

        let menu = MenuWidget::new(
            state.route.current,
            state.shell.menu_cursor,
            state.shell.sider_collapsed,
            theme,
        );
        frame.render_widget(menu, rows[2]);
    }

    fn render_header(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let theme = &state.config.theme;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Min(0), Constraint::Length(4)])
            .split(area);

        let search = if state.shell.search_focused {
            Line::from(vec![
                Span::styled("Search: ", Style::default().fg(theme.primary)),
                Span::styled(
                    state.shell.search.value.clone(),
                    Style::default().fg(theme.fg),
                ),
                Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
            ])
        } else if state.shell.search.is_empty() {
            Line::from(Span::styled(
                "/ Search",
                Style::default().fg(theme.muted),
            ))
        } else {
            Line::from(vec![
                Span::styled("Search: ", Style::default().fg(theme.muted)),
                Span::styled(
                    state.shell.search.value.clone(),
                    Style::default().fg(theme.fg),
                ),
            ])
        };
        frame.render_widget(Paragraph::new(search), columns[0]);

        let initial = state
            .session
            .current
            .as_ref()
            .map(|session| session.avatar_initial())
            .unwrap_or('?');
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("({initial})"),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
            columns[1],
        );
    }

    fn render_footer(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let theme = &state.config.theme;
        frame.render_widget(
            Paragraph::new(Span::styled(FOOTER_TEXT, Style::default().fg(theme.muted)))
                .alignment(Alignment::Center),
            area,
        );
    }

    fn render_status(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let theme = &state.config.theme;
        let message = state.system.status_message.clone().unwrap_or_default();
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(theme.fg))),
            area,
        );
    }
}

impl Default for ShellComponent {
    fn default() -> Self {
        Self::new()
    }
}
