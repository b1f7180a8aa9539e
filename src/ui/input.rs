//! Single-line query editor.
//!
//! Keeps the query text plus a char-indexed cursor and interprets the subset
//! of key events that edit it. Everything else is left to the caller.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editable query state for the prompt line.
#[derive(Debug, Default, Clone)]
pub struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars from the start of the text.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply a key event. Returns `true` when the text changed, which is the
    /// caller's cue to recompute the filtered view.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert(ch);
                true
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                let len = self.text.chars().count();
                if self.cursor < len {
                    self.cursor += 1;
                }
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.text.chars().count();
                false
            }
            _ => false,
        }
    }

    fn insert(&mut self, ch: char) {
        let byte = self.byte_at(self.cursor);
        self.text.insert(byte, ch);
        self.cursor += 1;
    }

    fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let byte = self.byte_at(self.cursor);
        self.text.remove(byte);
        true
    }

    fn delete_at_cursor(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        let byte = self.byte_at(self.cursor);
        self.text.remove(byte);
        true
    }

    fn byte_at(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn typing_appends_at_the_cursor() {
        let mut input = SearchInput::default();
        assert!(input.input(key(KeyCode::Char('r'))));
        assert!(input.input(key(KeyCode::Char('i'))));
        assert!(input.input(key(KeyCode::Char('c'))));
        assert_eq!(input.text(), "ric");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = SearchInput::new("rick");
        assert!(input.input(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "ric");
        input.input(key(KeyCode::Home));
        assert!(!input.input(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "ric");
    }

    #[test]
    fn editing_in_the_middle_uses_char_offsets() {
        let mut input = SearchInput::new("méch");
        input.input(key(KeyCode::Left));
        input.input(key(KeyCode::Left));
        assert!(input.input(key(KeyCode::Char('a'))));
        assert_eq!(input.text(), "méach");
    }

    #[test]
    fn movement_keys_do_not_report_changes() {
        let mut input = SearchInput::new("abc");
        assert!(!input.input(key(KeyCode::Left)));
        assert!(!input.input(key(KeyCode::End)));
        assert_eq!(input.cursor(), 3);
    }
}
