//! Single-line editable text field.
//!
//! Backs every input on the landing page (skills, feedback form, chat).
//! The cursor is tracked in char units; byte offsets are derived on demand.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor (unicode width of the text before it).
    pub fn cursor_column(&self) -> usize {
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text[..byte_idx].width()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replaces the whole value and moves the cursor to the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Returns the value and leaves the field empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    /// Inserts text at the cursor. Line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let flattened: String = text
            .chars()
            .filter(|ch| *ch != '\r')
            .map(|ch| if ch == '\n' { ' ' } else { ch })
            .collect();
        if flattened.is_empty() {
            return;
        }
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert_str(byte_idx, &flattened);
        self.cursor += flattened.chars().count();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Backspace semantics.
    pub fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_idx);
    }

    /// Delete-key semantics.
    pub fn delete_next_char(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_idx);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Applies an editing key. Returns false for keys the field does not handle.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if matches!(key.kind, KeyEventKind::Release) {
            return false;
        }

        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(ch);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => self.clear(),
            KeyCode::Backspace => self.delete_prev_char(),
            KeyCode::Delete => self.delete_next_char(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }
}

fn char_to_byte_index(text: &str, col: usize) -> usize {
    text.char_indices()
        .nth(col)
        .map_or(text.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_cursor_editing() {
        let mut field = TextField::new();
        for ch in "pyton".chars() {
            field.input(key(KeyCode::Char(ch)));
        }
        field.input(key(KeyCode::Left));
        field.input(key(KeyCode::Left));
        field.input(key(KeyCode::Char('h')));

        assert_eq!(field.text(), "python");
        assert_eq!(field.cursor(), 4);
    }

    #[test]
    fn test_backspace_and_delete_are_char_aware() {
        let mut field = TextField::new();
        field.set("café!");
        field.delete_prev_char();
        field.move_left();
        field.delete_next_char();

        assert_eq!(field.text(), "caf");
        field.move_home();
        field.delete_prev_char();
        assert_eq!(field.text(), "caf");
    }

    #[test]
    fn test_paste_flattens_line_breaks() {
        let mut field = TextField::new();
        field.insert_str("python,\r\nsql");

        assert_eq!(field.text(), "python, sql");
        assert_eq!(field.cursor(), 11);
    }

    #[test]
    fn test_take_empties_field() {
        let mut field = TextField::new();
        field.set("  hello ");

        assert_eq!(field.take(), "  hello ");
        assert_eq!(field.text(), "");
        assert_eq!(field.cursor(), 0);
        assert!(field.is_blank());
    }

    #[test]
    fn test_control_keys_are_not_inserted() {
        let mut field = TextField::new();
        field.set("abc");

        let handled = field.input(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));

        assert!(!handled);
        assert_eq!(field.text(), "abc");
    }

    #[test]
    fn test_cursor_column_uses_display_width() {
        let mut field = TextField::new();
        field.set("日本");

        assert_eq!(field.cursor_column(), 4);
    }
}
