//! Chat pane widget.
//!
//! Combines the transcript (scrollable bubbles) with an input area at the
//! bottom, separated by a divider.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::line,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::text::truncate_to_width;
use crate::theme::Theme;
use crate::transcript::{TranscriptState, TranscriptWidget, INPUT_PLACEHOLDER};
use crate::widgets::text_input::{InputBar, TextInputState, MAX_INPUT_LINES};

/// Height for the divider line.
const DIVIDER_HEIGHT: u16 = 1;

/// Chat pane combining transcript and input.
///
/// ```text
/// ┌─ beseda ── http://localhost:8000 ───┐
/// │                                12:01 │
/// │                                  hi  │
/// │  12:01                               │
/// │  hello                               │
/// ├──────────────────────────────────────┤
/// │ > Введите сообщение...               │
/// └──────────────────────────────────────┘
/// ```
pub struct ChatPane<'a> {
    transcript: &'a TranscriptState,
    input: &'a TextInputState,
    theme: &'a Theme,
    tick: usize,
    show_placeholder: bool,
    input_enabled: bool,
    endpoint: &'a str,
}

impl<'a> ChatPane<'a> {
    /// Create a new chat pane.
    pub fn new(
        transcript: &'a TranscriptState,
        input: &'a TextInputState,
        theme: &'a Theme,
    ) -> Self {
        Self {
            transcript,
            input,
            theme,
            tick: 0,
            show_placeholder: false,
            input_enabled: true,
            endpoint: "",
        }
    }

    /// Set the tick counter driving animations.
    #[must_use]
    pub fn tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }

    /// Set whether the welcome placeholder is shown.
    #[must_use]
    pub fn placeholder(mut self, show: bool) -> Self {
        self.show_placeholder = show;
        self
    }

    /// Set whether the input accepts keystrokes (false while sending).
    #[must_use]
    pub fn input_enabled(mut self, enabled: bool) -> Self {
        self.input_enabled = enabled;
        self
    }

    /// Set the endpoint shown in the title.
    #[must_use]
    pub fn endpoint(mut self, endpoint: &'a str) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Input area height: grows with content, clamped to `MAX_INPUT_LINES`.
    #[allow(clippy::cast_possible_truncation)]
    fn input_height(&self) -> u16 {
        (self.input.line_count() as u16).clamp(1, MAX_INPUT_LINES)
    }

    /// Render a horizontal divider line.
    fn render_divider(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }

        let divider = line::HORIZONTAL.repeat(area.width as usize);
        let line = Line::from(Span::styled(divider, Style::default().fg(self.theme.border)));
        Paragraph::new(vec![line]).render(area, buf);
    }
}

impl Widget for ChatPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.input_enabled {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let title = if self.endpoint.is_empty() {
            " beseda ".to_string()
        } else {
            let max = (area.width as usize).saturating_sub(12);
            format!(" beseda \u{2500} {} ", truncate_to_width(self.endpoint, max))
        };

        let block = Block::default()
            .title(title)
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(self.theme.base));

        let inner = block.inner(area);
        block.render(area, buf);

        let input_height = self.input_height();
        let input_bar = InputBar::new(self.input, self.theme)
            .focused(self.input_enabled)
            .placeholder(INPUT_PLACEHOLDER);

        if inner.height < input_height + DIVIDER_HEIGHT + 1 {
            // Not enough space, just show the input
            input_bar.render(inner, buf);
            return;
        }

        let transcript_height = inner.height - input_height - DIVIDER_HEIGHT;
        let divider_y = inner.y + transcript_height;
        let input_y = divider_y + DIVIDER_HEIGHT;

        let transcript_area = Rect::new(inner.x, inner.y, inner.width, transcript_height);
        let divider_area = Rect::new(inner.x, divider_y, inner.width, DIVIDER_HEIGHT);
        let input_area = Rect::new(inner.x, input_y, inner.width, input_height);

        TranscriptWidget::new(self.transcript, self.theme)
            .tick(self.tick)
            .placeholder(self.show_placeholder)
            .render(transcript_area, buf);

        self.render_divider(divider_area, buf);
        input_bar.render(input_area, buf);
    }
}
