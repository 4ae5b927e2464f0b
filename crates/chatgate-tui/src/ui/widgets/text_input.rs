//! Single-line text control used by entry form items.

use crate::text::{visual_width, window_to_width};
use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A single-line text input widget.
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    /// The text content.
    content: &'a str,
    /// Cursor position (character index).
    cursor: usize,
    /// Whether the input is focused.
    focused: bool,
    /// Placeholder text.
    placeholder: Option<&'a str>,
    /// Prompt prefix (e.g., "> ").
    prompt: &'a str,
}

impl<'a> TextInput<'a> {
    /// Create a new text input.
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            cursor: content.chars().count(),
            focused: false,
            placeholder: None,
            prompt: "> ",
        }
    }

    /// Set focus state.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Build the visible text with the cursor marker.
    ///
    /// The cursor is drawn as `|` before the character it sits on, or `_`
    /// at the end of the content.
    fn display_text(&self) -> String {
        let mut text = String::with_capacity(self.content.len() + 1);
        for (idx, ch) in self.content.chars().enumerate() {
            if self.focused && idx == self.cursor {
                text.push('|');
            }
            text.push(ch);
        }
        if self.focused && self.cursor >= self.content.chars().count() {
            text.push('_');
        }
        text
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 1 {
            return;
        }

        let prompt_style = if self.focused {
            Styles::active()
        } else {
            Styles::dim()
        };
        let mut spans = vec![Span::styled(self.prompt, prompt_style)];

        if self.content.is_empty() {
            if self.focused {
                spans.push(Span::styled("_", Styles::active()));
            }
            if let Some(placeholder) = self.placeholder {
                spans.push(Span::styled(placeholder, Styles::dim()));
            }
        } else {
            let available = usize::from(area.width).saturating_sub(visual_width(self.prompt));
            // The cursor marker sits at char index `cursor` of the display text
            let text = self.display_text();
            spans.push(Span::styled(
                window_to_width(&text, self.cursor, available).to_string(),
                Styles::default(),
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(Styles::default())
            .render(area, buf);
    }
}

/// State for a text input, managing content and cursor position.
///
/// The cursor is a character index, so multi-byte input edits cleanly.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    content: String,
    cursor: usize,
    /// Set by the first edit; untouched fields report no value.
    touched: bool,
}

impl TextInputState {
    /// Create a new empty text input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether the field has been edited at least once.
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// The submitted value: `None` until the field is edited.
    pub fn value(&self) -> Option<&str> {
        self.touched.then_some(self.content.as_str())
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map_or(self.content.len(), |(idx, _)| idx)
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor position.
    ///
    /// Newlines are ignored; the control is single-line.
    pub fn insert(&mut self, ch: char) {
        if ch == '\n' || ch == '\r' {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.content.insert(idx, ch);
        self.cursor += 1;
        self.touched = true;
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        for ch in s.chars() {
            self.insert(ch);
        }
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
            self.touched = true;
        }
    }

    /// Delete the character at the cursor (delete).
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
            self.touched = true;
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Create a widget from this state.
    pub fn widget(&self) -> TextInput<'_> {
        let mut input = TextInput::new(&self.content);
        input.cursor = self.cursor;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_state_basic() {
        let mut state = TextInputState::new();
        assert!(state.is_empty());
        assert_eq!(state.value(), None);

        state.insert('H');
        state.insert('i');
        assert_eq!(state.content(), "Hi");
        assert_eq!(state.cursor(), 2);

        state.backspace();
        assert_eq!(state.value(), Some("H"));
    }

    #[test]
    fn test_cleared_field_is_still_touched() {
        let mut state = TextInputState::new();
        state.insert('x');
        state.backspace();
        assert_eq!(state.value(), Some(""));
    }

    #[test]
    fn test_text_input_state_cursor_movement() {
        let mut state = TextInputState::new();
        state.insert_str("Hello");

        state.move_left();
        state.move_left();
        assert_eq!(state.cursor(), 3);

        state.insert('X');
        assert_eq!(state.content(), "HelXlo");

        state.move_home();
        state.delete();
        assert_eq!(state.content(), "elXlo");

        state.move_end();
        assert_eq!(state.cursor(), 5);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = TextInputState::new();
        state.insert_str("北京");
        state.move_left();
        state.insert('东');
        assert_eq!(state.content(), "北东京");

        state.move_end();
        state.backspace();
        assert_eq!(state.content(), "北东");
    }

    #[test]
    fn test_newlines_are_ignored() {
        let mut state = TextInputState::new();
        state.insert_str("a\nb");
        assert_eq!(state.content(), "ab");
    }

    #[test]
    fn test_navigation_does_not_touch() {
        let mut state = TextInputState::new();
        state.move_left();
        state.move_end();
        state.backspace();
        state.delete();
        assert!(!state.is_touched());
    }

    #[test]
    fn test_display_text_cursor_marker() {
        let mut state = TextInputState::new();
        state.insert_str("abc");
        assert_eq!(state.widget().focused(true).display_text(), "abc_");

        state.move_left();
        assert_eq!(state.widget().focused(true).display_text(), "ab|c");
        assert_eq!(state.widget().display_text(), "abc");
    }

    fn render_line(state: &TextInputState, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        state.widget().focused(true).render(area, &mut buf);
        crate::test_utils::buffer_to_string(&buf)
    }

    #[test]
    fn test_long_value_scrolls_with_cursor() {
        let mut state = TextInputState::new();
        state.insert_str("abcdefghij");
        assert_eq!(render_line(&state, 6), "> hij_");

        state.move_home();
        assert_eq!(render_line(&state, 6), "> |abc");

        state.move_right();
        state.move_right();
        state.move_right();
        state.move_right();
        assert_eq!(render_line(&state, 6), "> bcd|");
    }
}
