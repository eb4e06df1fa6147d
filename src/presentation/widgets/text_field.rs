use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::core::state::input::TextField;
use crate::presentation::config::styles::Theme;

/// A labeled single-line input rendered over three rows: label, value and
/// an error line. Password fields mask every character; the cursor cell is
/// drawn reversed while the field has focus.
#[derive(Clone)]
pub struct TextFieldWidget<'a> {
    label: &'a str,
    field: &'a TextField,
    focused: bool,
    masked: bool,
    error: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> TextFieldWidget<'a> {
    pub fn new(label: &'a str, field: &'a TextField, theme: &'a Theme) -> Self {
        Self {
            label,
            field,
            focused: false,
            masked: false,
            error: None,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// The value as shown, masked for password fields.
    pub fn display_value(&self) -> String {
        if self.masked {
            self.field.value.chars().map(|_| '•').collect()
        } else {
            self.field.value.clone()
        }
    }

    fn value_line(&self) -> Line<'static> {
        let value: Vec<char> = self.display_value().chars().collect();
        let base = Style::default().fg(self.theme.fg);
        if !self.focused {
            return Line::from(Span::styled(value.into_iter().collect::<String>(), base));
        }

        // Reverse the cell under the cursor; append a reversed space when the
        // cursor sits past the last character.
        let cursor = self.field.cursor.min(value.len());
        let before: String = value[..cursor].iter().collect();
        let (at, after) = if cursor < value.len() {
            (
                value[cursor].to_string(),
                value[cursor + 1..].iter().collect::<String>(),
            )
        } else {
            (" ".to_string(), String::new())
        };
        Line::from(vec![
            Span::styled(before, base),
            Span::styled(at, base.add_modifier(Modifier::REVERSED)),
            Span::styled(after, base),
        ])
    }
}

impl<'a> Widget for TextFieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let label_style = if self.focused {
            Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.muted)
        };
        let error_line = match self.error {
            Some(reason) => Line::from(Span::styled(
                reason.to_string(),
                Style::default().fg(self.theme.error),
            )),
            None => Line::from(""),
        };
        let lines = vec![
            Line::from(Span::styled(self.label, label_style)),
            self.value_line(),
            error_line,
        ];
        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::msg::InputEdit;

    fn typed(s: &str) -> TextField {
        let mut field = TextField::default();
        for c in s.chars() {
            field.apply(InputEdit::Insert(c));
        }
        field
    }

    #[test]
    fn test_password_masking() {
        let theme = Theme::default();
        let field = typed("secret");
        let widget = TextFieldWidget::new("Password", &field, &theme).masked(true);
        assert_eq!(widget.display_value(), "••••••");
    }

    #[test]
    fn test_plain_value_is_untouched() {
        let theme = Theme::default();
        let field = typed("jack@openmesh.com");
        let widget = TextFieldWidget::new("Email", &field, &theme);
        assert_eq!(widget.display_value(), "jack@openmesh.com");
    }

    #[test]
    fn test_render_shows_label_value_and_error() {
        let theme = Theme::default();
        let field = typed("jack");
        let widget = TextFieldWidget::new("Email", &field, &theme)
            .error(Some("Please input a valid email"));
        let area = Rect::new(0, 0, 40, 3);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);

        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Email"));
        assert!(content.contains("jack"));
        assert!(content.contains("Please input a valid email"));
    }

    #[test]
    fn test_focused_render_does_not_panic_on_empty_value() {
        let theme = Theme::default();
        let field = TextField::default();
        let widget = TextFieldWidget::new("Email", &field, &theme).focused(true);
        let area = Rect::new(0, 0, 40, 3);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
    }
}
