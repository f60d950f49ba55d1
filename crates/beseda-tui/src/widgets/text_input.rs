//! Multi-line text input: state plus the input bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// Maximum content lines the input area grows to.
pub const MAX_INPUT_LINES: u16 = 4;

/// State for a text input, managing content and cursor position.
///
/// The cursor is a byte offset, always on a `char` boundary.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    /// The text content.
    content: String,
    /// Cursor position (byte offset).
    cursor: usize,
    /// Submitted inputs for up/down navigation.
    history: Vec<String>,
    /// Current history index (None = editing current input).
    history_index: Option<usize>,
    /// Saved current input while navigating history.
    saved_input: String,
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

    /// Get the cursor position (byte offset).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of content lines (at least 1).
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        self.content.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        self.content.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.content[..self.cursor].char_indices().next_back() {
            self.content.remove(idx);
            self.cursor = idx;
        }
    }

    /// Delete the character at the cursor (delete).
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor one character left.
    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.content[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    /// Move cursor one character right.
    pub fn move_right(&mut self) {
        if let Some(ch) = self.content[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Move cursor to start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Take the content, add it to history, and clear the state.
    pub fn submit(&mut self) -> String {
        let content = std::mem::take(&mut self.content);
        self.cursor = 0;
        if !content.trim().is_empty() {
            self.history.push(content.clone());
        }
        self.history_index = None;
        self.saved_input.clear();
        content
    }

    /// Navigate to the previous (older) history entry.
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }

        let next_index = match self.history_index {
            None => {
                self.saved_input = std::mem::take(&mut self.content);
                self.history.len() - 1
            }
            Some(0) => 0,
            Some(i) => i - 1,
        };

        self.history_index = Some(next_index);
        self.content = self.history[next_index].clone();
        self.cursor = self.content.len();
    }

    /// Navigate to the next (newer) history entry, restoring the saved
    /// input past the newest one.
    pub fn history_next(&mut self) {
        let Some(index) = self.history_index else {
            return;
        };

        if index + 1 < self.history.len() {
            self.history_index = Some(index + 1);
            self.content = self.history[index + 1].clone();
        } else {
            self.history_index = None;
            self.content = std::mem::take(&mut self.saved_input);
        }
        self.cursor = self.content.len();
    }
}

/// Input bar widget.
///
/// Shows a `> ` prompt, a block cursor when focused, and a dim placeholder
/// when empty. While a send is in flight the bar renders unfocused with no
/// cursor, which is the disabled state.
pub struct InputBar<'a> {
    input: &'a TextInputState,
    theme: &'a Theme,
    focused: bool,
    placeholder: Option<&'a str>,
}

impl<'a> InputBar<'a> {
    /// Create a new input bar widget.
    pub fn new(input: &'a TextInputState, theme: &'a Theme) -> Self {
        Self {
            input,
            theme,
            focused: false,
            placeholder: None,
        }
    }

    /// Set whether the input bar is focused (accepting keystrokes).
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set placeholder text shown when the input is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Build display lines and the index of the line holding the cursor.
    fn build_lines(&self) -> (Vec<Line<'static>>, usize) {
        let prompt_style = Style::default().fg(self.theme.primary);
        let text_style = Style::default().fg(self.theme.text);

        if self.input.is_empty() {
            let mut spans = vec![Span::styled("> ", prompt_style)];
            if self.focused {
                spans.push(Span::styled("█", text_style));
            }
            if let Some(placeholder) = self.placeholder {
                spans.push(Span::styled(
                    placeholder.to_string(),
                    Style::default().fg(self.theme.muted),
                ));
            }
            return (vec![Line::from(spans)], 0);
        }

        let content = self.input.content();
        let cursor = self.input.cursor();

        let mut lines = Vec::new();
        let mut cursor_line = 0;
        let mut line_start = 0;

        for (line_idx, line_text) in content.split('\n').enumerate() {
            let prefix = if line_idx == 0 { "> " } else { "  " };
            let line_end = line_start + line_text.len();

            let mut spans = vec![Span::styled(prefix.to_string(), prompt_style)];

            // The cursor sits on this line when its offset falls within it
            // (inclusive of the end, where the trailing newline would be).
            if self.focused && cursor >= line_start && cursor <= line_end {
                cursor_line = line_idx;
                let col = cursor - line_start;
                let before = &line_text[..col];
                let after = &line_text[col..];
                if !before.is_empty() {
                    spans.push(Span::styled(before.to_string(), text_style));
                }
                spans.push(Span::styled("█", text_style));
                if !after.is_empty() {
                    spans.push(Span::styled(after.to_string(), text_style));
                }
            } else {
                spans.push(Span::styled(line_text.to_string(), text_style));
            }

            lines.push(Line::from(spans));
            line_start = line_end + 1;
        }

        (lines, cursor_line)
    }
}

impl Widget for InputBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let (lines, cursor_line) = self.build_lines();

        // Keep the cursor line visible when content exceeds the area.
        let height = area.height as usize;
        let scroll = if lines.len() <= height {
            0
        } else {
            cursor_line.saturating_sub(height - 1)
        };

        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_terminal_sized};

    #[test]
    fn test_text_input_state_basic() {
        let mut state = TextInputState::new();
        assert!(state.is_empty());

        state.insert('H');
        state.insert('i');
        assert_eq!(state.content(), "Hi");
        assert_eq!(state.cursor(), 2);

        state.backspace();
        assert_eq!(state.content(), "H");

        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn test_text_input_multibyte() {
        let mut state = TextInputState::new();
        state.insert_str("Привет");
        assert_eq!(state.line_count(), 1);

        state.backspace();
        assert_eq!(state.content(), "Приве");

        state.move_left();
        state.move_left();
        state.insert('х');
        assert_eq!(state.content(), "Прихве");

        state.move_end();
        state.delete();
        assert_eq!(state.content(), "Прихве");
    }

    #[test]
    fn test_text_input_cursor_movement() {
        let mut state = TextInputState::new();
        state.insert_str("Hello");

        state.move_left();
        state.move_left();
        assert_eq!(state.cursor(), 3);

        state.insert('X');
        assert_eq!(state.content(), "HelXlo");

        state.move_home();
        assert_eq!(state.cursor(), 0);

        state.move_end();
        assert_eq!(state.cursor(), 6);
    }

    #[test]
    fn test_submit_clears_and_records_history() {
        let mut state = TextInputState::new();

        state.insert_str("first");
        assert_eq!(state.submit(), "first");
        assert!(state.is_empty());

        state.insert_str("second");
        state.submit();

        state.history_prev();
        assert_eq!(state.content(), "second");

        state.history_prev();
        assert_eq!(state.content(), "first");

        state.history_next();
        assert_eq!(state.content(), "second");
    }

    #[test]
    fn test_history_restores_saved_input() {
        let mut state = TextInputState::new();
        state.insert_str("old");
        state.submit();

        state.insert_str("draft");
        state.history_prev();
        assert_eq!(state.content(), "old");

        state.history_next();
        assert_eq!(state.content(), "draft");
    }

    #[test]
    fn test_whitespace_submit_not_recorded() {
        let mut state = TextInputState::new();
        state.insert_str("   ");
        state.submit();

        state.history_prev();
        assert!(state.is_empty());
    }

    #[test]
    fn test_line_count() {
        let mut state = TextInputState::new();
        assert_eq!(state.line_count(), 1);
        state.insert_str("a\nb\nc");
        assert_eq!(state.line_count(), 3);
    }

    #[test]
    fn test_input_bar_renders_placeholder() {
        let state = TextInputState::new();
        let theme = Theme::default();

        let mut terminal = create_test_terminal_sized(40, 3);
        terminal
            .draw(|frame| {
                let bar = InputBar::new(&state, &theme)
                    .focused(true)
                    .placeholder("Введите сообщение...");
                frame.render_widget(bar, frame.area());
            })
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("> █Введите сообщение..."));
    }

    #[test]
    fn test_input_bar_unfocused_has_no_cursor() {
        let mut state = TextInputState::new();
        state.insert_str("hi");
        let theme = Theme::default();

        let mut terminal = create_test_terminal_sized(40, 3);
        terminal
            .draw(|frame| {
                frame.render_widget(InputBar::new(&state, &theme), frame.area());
            })
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("> hi"));
        assert!(!content.contains('█'));
    }

    #[test]
    fn test_input_bar_multiline_prefix() {
        let mut state = TextInputState::new();
        state.insert_str("one\ntwo");
        let theme = Theme::default();

        let mut terminal = create_test_terminal_sized(40, 4);
        terminal
            .draw(|frame| {
                frame.render_widget(InputBar::new(&state, &theme).focused(true), frame.area());
            })
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("> one"));
        assert!(content.contains("  two"));
    }
}
