//! Field editor
//!
//! A small text editor backing the URL, headers, and body form fields.
//! Single- and multi-line editing share the same component; the headers and
//! body fields allow newline insertion, the URL field does not (Enter submits
//! there instead).

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Editable text field with a byte-offset cursor
#[derive(Debug, Clone, Default)]
pub struct FieldEditor {
    content: String,
    cursor: usize,
}

impl FieldEditor {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_content(content: String) -> Self {
        let cursor = content.len();
        Self { content, cursor }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Replace all content, cursor moves to the end
    pub fn set_content(&mut self, content: String) {
        self.cursor = content.len();
        self.content = content;
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let cursor = self.clamp_to_boundary(self.cursor);
        self.content.insert(cursor, c);
        self.cursor = cursor + c.len_utf8();
    }

    /// Insert a newline at the cursor (multi-line fields only)
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Insert a string with smart quotes normalized to straight quotes,
    /// so pasted text stays valid JSON
    pub fn insert_str_normalized(&mut self, s: &str) {
        let normalized = s
            .replace('\u{201C}', "\"")
            .replace('\u{201D}', "\"")
            .replace('\u{2018}', "'")
            .replace('\u{2019}', "'");

        let cursor = self.clamp_to_boundary(self.cursor);
        self.content.insert_str(cursor, &normalized);
        self.cursor = cursor + normalized.len();
    }

    /// Backspace. Returns false at the start of the content.
    pub fn delete_char_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let mut cursor = self.cursor;
        while cursor > 0 && !self.content.is_char_boundary(cursor - 1) {
            cursor -= 1;
        }
        if cursor > 0 {
            cursor -= 1;
        }

        self.content.remove(cursor);
        self.cursor = cursor;
        true
    }

    /// Delete key. Returns false at the end of the content.
    pub fn delete_char_after_cursor(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }

        let cursor = self.clamp_to_boundary(self.cursor);
        self.content.remove(cursor);
        true
    }

    pub fn move_cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let mut new_cursor = self.cursor - 1;
        while new_cursor > 0 && !self.content.is_char_boundary(new_cursor) {
            new_cursor -= 1;
        }

        self.cursor = new_cursor;
        true
    }

    pub fn move_cursor_right(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }

        let mut new_cursor = self.cursor + 1;
        while new_cursor < self.content.len() && !self.content.is_char_boundary(new_cursor) {
            new_cursor += 1;
        }

        self.cursor = new_cursor.min(self.content.len());
        true
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Content split at the cursor, for rendering a cursor marker
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.content.split_at(self.clamp_to_boundary(self.cursor))
    }

    /// Cursor position as (line, column) character counts, for rendering
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.content[..self.clamp_to_boundary(self.cursor)];
        let line = before.matches('\n').count();
        let col = before
            .rsplit_once('\n')
            .map(|(_, tail)| tail.chars().count())
            .unwrap_or_else(|| before.chars().count());
        (line, col)
    }

    /// Handle a key event shared by all text fields.
    /// Returns true if the event was consumed.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Backspace => self.delete_char_before_cursor(),
            KeyCode::Delete => self.delete_char_after_cursor(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => {
                self.move_cursor_to_start();
                true
            }
            KeyCode::End => {
                self.move_cursor_to_end();
                true
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_cursor_to_start();
                true
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_cursor_to_end();
                true
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.handle_paste_batch(c);
                true
            }
            _ => false,
        }
    }

    /// Collect rapidly arriving character events into one insertion.
    ///
    /// Terminal paste delivers characters as a burst of key events; draining
    /// the queue here keeps large pastes responsive and lets quote
    /// normalization see the whole pasted string. Returns the number of
    /// characters inserted.
    pub fn handle_paste_batch(&mut self, initial_char: char) -> usize {
        let mut chars = vec![initial_char];

        loop {
            match crossterm::event::poll(std::time::Duration::from_millis(0)) {
                Ok(true) => {
                    if let Ok(Event::Key(next_key)) = crossterm::event::read() {
                        match next_key.code {
                            KeyCode::Char(next_c)
                                if !next_key.modifiers.contains(KeyModifiers::CONTROL) =>
                            {
                                chars.push(next_c);
                            }
                            KeyCode::Enter => {
                                chars.push('\n');
                            }
                            _ => break,
                        }
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }

        let count = chars.len();
        let batch: String = chars.into_iter().collect();
        self.insert_str_normalized(&batch);
        count
    }

    /// Clamp cursor to a valid UTF-8 character boundary
    fn clamp_to_boundary(&self, cursor: usize) -> usize {
        let mut pos = cursor.min(self.content.len());
        while pos > 0 && !self.content.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_editor_is_empty() {
        let editor = FieldEditor::new();
        assert_eq!(editor.content(), "");
        assert!(editor.is_blank());
    }

    #[test]
    fn test_with_content_places_cursor_at_end() {
        let mut editor = FieldEditor::with_content("hello".to_string());
        assert_eq!(editor.content(), "hello");
        assert!(!editor.move_cursor_right()); // already at end
    }

    #[test]
    fn test_insert_char() {
        let mut editor = FieldEditor::new();
        editor.insert_char('a');
        editor.insert_char('b');
        assert_eq!(editor.content(), "ab");
    }

    #[test]
    fn test_insert_mid_content() {
        let mut editor = FieldEditor::with_content("ac".to_string());
        editor.move_cursor_left();
        editor.insert_char('b');
        assert_eq!(editor.content(), "abc");
    }

    #[test]
    fn test_delete_char_before_cursor() {
        let mut editor = FieldEditor::with_content("hello".to_string());
        assert!(editor.delete_char_before_cursor());
        assert_eq!(editor.content(), "hell");
    }

    #[test]
    fn test_delete_at_start_is_noop() {
        let mut editor = FieldEditor::with_content("hello".to_string());
        editor.move_cursor_to_start();
        assert!(!editor.delete_char_before_cursor());
        assert_eq!(editor.content(), "hello");
    }

    #[test]
    fn test_is_blank_with_whitespace() {
        let editor = FieldEditor::with_content("  \n\t ".to_string());
        assert!(editor.is_blank());
    }

    #[test]
    fn test_newline_and_line_col() {
        let mut editor = FieldEditor::new();
        editor.insert_str_normalized("{\n  \"a\": 1");
        assert_eq!(editor.cursor_line_col(), (1, 8));
        editor.insert_newline();
        assert_eq!(editor.cursor_line_col(), (2, 0));
    }

    #[test]
    fn test_cursor_line_col_single_line() {
        let editor = FieldEditor::with_content("http://localhost".to_string());
        assert_eq!(editor.cursor_line_col(), (0, 16));
    }

    #[test]
    fn test_utf8_handling() {
        let mut editor = FieldEditor::new();
        editor.insert_char('😀');
        assert_eq!(editor.content(), "😀");
        assert!(editor.delete_char_before_cursor());
        assert_eq!(editor.content(), "");
    }

    #[test]
    fn test_smart_quote_normalization() {
        let mut editor = FieldEditor::new();
        let smart_quoted = "{\u{201C}username\u{201D}:\u{201D}test\u{201D}}";
        editor.insert_str_normalized(smart_quoted);
        assert_eq!(editor.content(), r#"{"username":"test"}"#);
    }

    #[test]
    fn test_regular_quotes_unchanged() {
        let mut editor = FieldEditor::new();
        editor.insert_str_normalized(r#"{"username":"test"}"#);
        assert_eq!(editor.content(), r#"{"username":"test"}"#);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut editor = FieldEditor::with_content("hello".to_string());
        editor.clear();
        assert_eq!(editor.content(), "");
        editor.insert_char('x');
        assert_eq!(editor.content(), "x");
    }
}
