use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Widget};

use crate::domain::nav::{nav_index_of, nav_items, Route};
use crate::presentation::config::styles::Theme;

/// Side-menu widget.
///
/// The selected marking follows the current route only; the cursor is the
/// hovered row and is drawn with a `❯` prefix. A route without a menu entry
/// leaves every row unmarked.
#[derive(Clone)]
pub struct MenuWidget<'a> {
    route: Route,
    cursor: usize,
    collapsed: bool,
    theme: &'a Theme,
}

impl<'a> MenuWidget<'a> {
    pub fn new(route: Route, cursor: usize, collapsed: bool, theme: &'a Theme) -> Self {
        Self {
            route,
            cursor,
            collapsed,
            theme,
        }
    }

    /// Index of the row marked as selected, derived from the route.
    pub fn selected_index(&self) -> Option<usize> {
        nav_index_of(self.route)
    }

    pub fn rows(&self) -> Vec<String> {
        nav_items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let prefix = if i == self.cursor { "❯ " } else { "  " };
                if self.collapsed {
                    format!("{prefix}{}", item.icon)
                } else {
                    format!("{prefix}{} {}", item.icon, item.label)
                }
            })
            .collect()
    }
}

impl<'a> Widget for MenuWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let selected = self.selected_index();
        let items: Vec<ListItem> = self
            .rows()
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let style = if Some(i) == selected {
                    Style::default()
                        .fg(self.theme.primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.theme.fg)
                };
                ListItem::new(row).style(style)
            })
            .collect();

        Widget::render(List::new(items), area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_selected_follows_route_not_cursor() {
        let theme = Theme::default();
        let widget = MenuWidget::new(Route::Dashboard, 2, false, &theme);
        assert_eq!(widget.selected_index(), Some(0));
    }

    #[test]
    fn test_non_menu_route_marks_nothing() {
        let theme = Theme::default();
        let widget = MenuWidget::new(Route::Signin, 0, false, &theme);
        assert_eq!(widget.selected_index(), None);
    }

    #[test]
    fn test_rows_show_cursor_and_labels() {
        let theme = Theme::default();
        let widget = MenuWidget::new(Route::Dashboard, 1, false, &theme);
        let rows = widget.rows();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].starts_with("  "));
        assert!(rows[1].starts_with("❯ "));
        assert!(rows[0].contains("Dashboard"));
        assert!(rows[1].contains("Bookings"));
    }

    #[test]
    fn test_collapsed_rows_drop_labels() {
        let theme = Theme::default();
        let widget = MenuWidget::new(Route::Dashboard, 0, true, &theme);
        let rows = widget.rows();
        assert!(rows.iter().all(|row| !row.contains("Dashboard")));
        assert!(rows[0].contains('◔'));
    }

    #[test]
    fn test_render_does_not_panic() {
        let theme = Theme::default();
        let widget = MenuWidget::new(Route::Dashboard, 0, false, &theme);
        let area = Rect::new(0, 0, 24, 10);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);

        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Dashboard"));
        assert!(content.contains("Settings"));
    }
}
