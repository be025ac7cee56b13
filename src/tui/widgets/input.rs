//! Text input widget
//!
//! A single-line text field with a movable cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget.
///
/// The cursor is tracked as a character index, so editing stays safe
/// around multi-byte input such as the currency symbol.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    cursor: usize,
    focused: bool,
    placeholder: String,
}

impl TextInput {
    /// Create a new empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, moving the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.chars().count();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Whether the input holds no text
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Update the focused state in place
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether the input currently has focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn byte_offset(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(offset, _)| offset)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let offset = self.byte_offset();
        self.content.insert(offset, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset();
            self.content.remove(offset);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let offset = self.byte_offset();
            self.content.remove(offset);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let line = if self.content.is_empty() && !self.focused {
            Line::from(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ))
        } else if self.focused {
            // Split around the cursor so its cell renders reversed.
            let before: String = self.content.chars().take(self.cursor).collect();
            let at = self
                .content
                .chars()
                .nth(self.cursor)
                .map(String::from)
                .unwrap_or_else(|| String::from(" "));
            let after: String = self.content.chars().skip(self.cursor + 1).collect();
            Line::from(vec![
                Span::raw(before),
                Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
                Span::raw(after),
            ])
        } else {
            Line::from(self.content.clone())
        };

        line.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_value() {
        let mut input = TextInput::new();
        input.insert('a');
        input.insert('b');
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut input = TextInput::new().content("ac");
        input.move_left();
        input.insert('b');
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_backspace_removes_before_cursor() {
        let mut input = TextInput::new().content("abc");
        input.backspace();
        assert_eq!(input.value(), "ab");
        input.move_start();
        input.backspace();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_delete_removes_at_cursor() {
        let mut input = TextInput::new().content("abc");
        input.delete();
        assert_eq!(input.value(), "abc");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn test_multibyte_editing_is_char_safe() {
        let mut input = TextInput::new();
        input.insert('₹');
        input.insert('5');
        assert_eq!(input.value(), "₹5");
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "5");
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = TextInput::new().content("abc");
        input.clear();
        assert_eq!(input.value(), "");
        input.insert('x');
        assert_eq!(input.value(), "x");
    }
}
