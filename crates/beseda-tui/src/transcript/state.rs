//! Transcript state management.
//!
//! Handles item storage, scrolling, follow mode, and the busy indicator.

use super::item::TranscriptItem;
use beseda_client::Message;

/// Items scrolled per mouse wheel tick.
pub const SCROLL_SPEED: usize = 3;

/// Transcript pane state.
#[derive(Debug, Default)]
pub struct TranscriptState {
    /// All items in chronological order.
    items: Vec<TranscriptItem>,
    /// Index of the first visible item when not following.
    scroll_offset: usize,
    /// Whether to auto-follow new items.
    follow: bool,
    /// Whether the busy indicator is visible. It always renders after the
    /// last item, so showing it again implicitly relocates it to the end.
    busy: bool,
}

impl TranscriptState {
    /// Create a new empty transcript state.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            scroll_offset: 0,
            follow: true,
            busy: false,
        }
    }

    /// Get all items.
    pub fn items(&self) -> &[TranscriptItem] {
        &self.items
    }

    /// Get the scroll offset (first visible item index).
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Check if follow mode is enabled.
    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Check if the transcript has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the busy indicator is visible.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Show the busy indicator after the latest item.
    pub fn set_busy(&mut self) {
        self.busy = true;
    }

    /// Hide the busy indicator.
    pub fn clear_busy(&mut self) {
        self.busy = false;
    }

    /// Append a chat bubble.
    ///
    /// New items always land before the busy indicator's render position.
    pub fn push_message(&mut self, message: Message) {
        self.items.push(TranscriptItem::Bubble(message));
    }

    /// Append an inline error banner.
    pub fn push_banner(&mut self, text: impl Into<String>) {
        self.items.push(TranscriptItem::ErrorBanner(text.into()));
    }

    /// Scroll up by the given number of items. Disables follow mode.
    pub fn scroll_up(&mut self, amount: usize) {
        if self.items.is_empty() {
            return;
        }
        if self.follow {
            self.follow = false;
            self.scroll_offset = self.items.len().saturating_sub(1);
        }
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Scroll down by the given number of items.
    ///
    /// Reaching the last item re-enables follow mode.
    pub fn scroll_down(&mut self, amount: usize) {
        if self.items.is_empty() {
            return;
        }
        let max_offset = self.items.len() - 1;
        self.scroll_offset = (self.scroll_offset + amount).min(max_offset);
        if self.scroll_offset == max_offset {
            self.follow = true;
        }
    }

    /// Jump to the first item. Disables follow mode.
    pub fn jump_to_start(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.follow = false;
        self.scroll_offset = 0;
    }

    /// Jump to the latest item. Enables follow mode.
    pub fn jump_to_end(&mut self) {
        self.follow = true;
        self.scroll_offset = self.items.len().saturating_sub(1);
    }
}
