//! Dashboard view
//!
//! Two cards: "Recent Bookings" with the summary statistics, the bookings
//! chart and a tooltip line for the hovered point, and a "Upcoming
//! Bookings" card that is intentionally title-only.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;
use crate::presentation::widgets::{BookingChartWidget, StatisticWidget};

#[derive(Debug, Clone)]
pub struct DashboardComponent;

impl DashboardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let theme = &state.config.theme;
        let cards = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let recent = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted))
            .title(Span::styled(
                " Recent Bookings ",
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ));
        let inner = recent.inner(cards[0]);
        frame.render_widget(recent, cards[0]);
        self.render_recent(state, frame, inner);

        let upcoming = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted))
            .title(Span::styled(
                " Upcoming Bookings ",
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(upcoming, cards[1]);
    }

    fn render_recent(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let theme = &state.config.theme;
        let dashboard = &state.dashboard;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(2), // statistics
                Constraint::Length(1),
                Constraint::Min(0),    // chart
                Constraint::Length(1), // tooltip
            ])
            .split(area);

        let stats = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);
        frame.render_widget(
            StatisticWidget::new("Booking value", dashboard.booking_value, Some("$"), theme),
            stats[0],
        );
        frame.render_widget(
            StatisticWidget::new("Booking quantity", dashboard.booking_quantity, None, theme),
            stats[1],
        );

        frame.render_widget(
            BookingChartWidget::new(
                &dashboard.samples,
                &dashboard.chart,
                dashboard.selected,
                theme,
            ),
            rows[2],
        );

        frame.render_widget(self.tooltip_line(state), rows[3]);
    }

    /// The hovered-point readout, derived from the sample under the cursor.
    fn tooltip_line<'a>(&self, state: &'a AppState) -> Paragraph<'a> {
        let theme = &state.config.theme;
        let dashboard = &state.dashboard;
        match dashboard.selected_sample() {
            Some(sample) => {
                let mut spans = vec![Span::styled(
                    dashboard.chart.tooltip_title(sample),
                    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
                )];
                for (name, value) in dashboard.chart.tooltip_content(sample) {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(
                        format!("{name} {value}"),
                        Style::default().fg(theme.fg),
                    ));
                }
                Paragraph::new(Line::from(spans))
            }
            None => Paragraph::new(Span::styled(
                "←/→ to inspect points",
                Style::default().fg(theme.muted),
            )),
        }
    }
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}
