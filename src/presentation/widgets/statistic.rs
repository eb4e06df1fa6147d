use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};
use thousands::Separable;

use crate::presentation::config::styles::Theme;

/// A labeled summary number, e.g. `Booking value` over `$112,893`.
#[derive(Clone)]
pub struct StatisticWidget<'a> {
    title: &'a str,
    value: u64,
    prefix: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatisticWidget<'a> {
    pub fn new(title: &'a str, value: u64, prefix: Option<&'a str>, theme: &'a Theme) -> Self {
        Self {
            title,
            value,
            prefix,
            theme,
        }
    }

    /// The value with thousands separators and the optional prefix.
    pub fn formatted(&self) -> String {
        let grouped = self.value.separate_with_commas();
        match self.prefix {
            Some(prefix) => format!("{prefix}{grouped}"),
            None => grouped,
        }
    }
}

impl<'a> Widget for StatisticWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let lines = vec![
            Line::from(Span::styled(
                self.title,
                Style::default().fg(self.theme.muted),
            )),
            Line::from(Span::styled(
                self.formatted(),
                Style::default()
                    .fg(self.theme.fg)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}
