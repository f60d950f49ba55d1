//! Transcript widget for rendering chat bubbles.
//!
//! User bubbles render right-aligned, assistant bubbles left-aligned, both
//! wrapped to at most 80% of the pane width. Error banners span the full
//! width. The busy indicator, when visible, always renders after the last
//! item.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::item::{TranscriptItem, WELCOME_PLACEHOLDER};
use super::state::TranscriptState;
use crate::theme::Theme;

/// Animation frames for the busy indicator, advanced by the app tick.
const BUSY_FRAMES: [&str; 3] = ["●", "● ●", "● ● ●"];

/// Transcript pane widget.
pub struct TranscriptWidget<'a> {
    state: &'a TranscriptState,
    theme: &'a Theme,
    tick: usize,
    show_placeholder: bool,
}

impl<'a> TranscriptWidget<'a> {
    /// Create a new transcript widget.
    pub fn new(state: &'a TranscriptState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            tick: 0,
            show_placeholder: false,
        }
    }

    /// Set the tick counter driving the busy animation.
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

    /// Build the display lines for a single bubble.
    fn bubble_lines(&self, item: &TranscriptItem, bubble_width: usize) -> Vec<Line<'static>> {
        let TranscriptItem::Bubble(msg) = item else {
            return Vec::new();
        };

        let align = if item.is_right_aligned() {
            Alignment::Right
        } else {
            Alignment::Left
        };
        let bg = if item.is_right_aligned() {
            self.theme.user_bubble
        } else {
            self.theme.assistant_bubble
        };

        let mut lines = Vec::new();

        // Time gutter above the bubble, on the same side
        lines.push(
            Line::from(Span::styled(
                msg.time_str(),
                Style::default().fg(self.theme.muted),
            ))
            .alignment(align),
        );

        // Wrapped content, one cell of padding each side
        let wrap_width = bubble_width.saturating_sub(2).max(1);
        let content_style = Style::default().fg(self.theme.text).bg(bg);
        let mut content_lines: Vec<String> = Vec::new();
        for raw_line in msg.text.split('\n') {
            if raw_line.is_empty() {
                content_lines.push(String::new());
                continue;
            }
            for wrapped in textwrap::wrap(raw_line, wrap_width) {
                content_lines.push(wrapped.into_owned());
            }
        }

        for content in content_lines {
            lines.push(
                Line::from(Span::styled(format!(" {content} "), content_style)).alignment(align),
            );
        }

        lines
    }

    /// Build the display lines for an error banner.
    fn banner_lines(&self, text: &str, width: usize) -> Vec<Line<'static>> {
        let style = Style::default().fg(self.theme.error);
        let wrap_width = width.saturating_sub(2).max(1);

        textwrap::wrap(text, wrap_width)
            .into_iter()
            .enumerate()
            .map(|(i, wrapped)| {
                let prefix = if i == 0 { "! " } else { "  " };
                Line::from(Span::styled(format!("{prefix}{wrapped}"), style))
            })
            .collect()
    }

    /// Build all display lines plus the starting line index of each item.
    fn build_lines(&self, width: usize) -> (Vec<Line<'static>>, Vec<usize>) {
        let bubble_width = (width * 4 / 5).clamp(4, width.max(4));
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut item_starts: Vec<usize> = Vec::new();

        if self.show_placeholder {
            lines.push(
                Line::from(Span::styled(
                    WELCOME_PLACEHOLDER,
                    Style::default().fg(self.theme.muted),
                ))
                .alignment(Alignment::Center),
            );
            lines.push(Line::default());
        }

        for item in self.state.items() {
            item_starts.push(lines.len());
            match item {
                TranscriptItem::Bubble(_) => lines.extend(self.bubble_lines(item, bubble_width)),
                TranscriptItem::ErrorBanner(text) => {
                    lines.extend(self.banner_lines(text, width));
                }
            }
            lines.push(Line::default());
        }

        if self.state.is_busy() {
            let frame = BUSY_FRAMES[self.tick % BUSY_FRAMES.len()];
            lines.push(Line::from(Span::styled(
                frame.to_string(),
                Style::default().fg(self.theme.muted),
            )));
        }

        (lines, item_starts)
    }
}

impl Widget for TranscriptWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Empty state: centered placeholder, nothing else
        if self.state.is_empty() && !self.state.is_busy() {
            if self.show_placeholder {
                let line = Line::from(Span::styled(
                    WELCOME_PLACEHOLDER,
                    Style::default().fg(self.theme.muted),
                ))
                .alignment(Alignment::Center);
                Paragraph::new(vec![line]).render(
                    Rect::new(area.x, area.y + area.height / 2, area.width, 1),
                    buf,
                );
            }
            return;
        }

        let (lines, item_starts) = self.build_lines(area.width as usize);

        let total = lines.len();
        let height = area.height as usize;
        let max_offset = total.saturating_sub(height);

        let offset = if self.state.is_following() {
            // Bottom-anchor: the latest line is always visible
            max_offset
        } else {
            item_starts
                .get(self.state.scroll_offset())
                .copied()
                .unwrap_or(0)
                .min(max_offset)
        };

        #[allow(clippy::cast_possible_truncation)]
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(area, buf);
    }
}
