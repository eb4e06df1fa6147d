use serde::{Deserialize, Serialize};

use crate::core::msg::InputEdit;

/// A single-line text field with a character-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextField {
    pub value: String,
    pub cursor: usize,
}

impl TextField {
    pub fn apply(&mut self, edit: InputEdit) {
        let mut chars: Vec<char> = self.value.chars().collect();
        match edit {
            InputEdit::Insert(c) => {
                chars.insert(self.cursor.min(chars.len()), c);
                self.cursor = (self.cursor + 1).min(chars.len());
            }
            InputEdit::Backspace => {
                if self.cursor > 0 && !chars.is_empty() {
                    chars.remove(self.cursor - 1);
                    self.cursor -= 1;
                }
            }
            InputEdit::Delete => {
                if self.cursor < chars.len() {
                    chars.remove(self.cursor);
                }
            }
            InputEdit::CursorLeft => self.cursor = self.cursor.saturating_sub(1),
            InputEdit::CursorRight => self.cursor = (self.cursor + 1).min(chars.len()),
            InputEdit::CursorStart => self.cursor = 0,
            InputEdit::CursorEnd => self.cursor = chars.len(),
        }
        self.value = chars.into_iter().collect();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}
