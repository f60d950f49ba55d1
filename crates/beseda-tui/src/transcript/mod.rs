//! Transcript pane: item types, scroll/follow state, and the widget.

mod item;
mod state;
mod widget;

pub use item::{
    TranscriptItem, HISTORY_ERROR_BANNER, INPUT_PLACEHOLDER, SEND_ERROR_BANNER, WELCOME_PLACEHOLDER,
};
pub use state::{TranscriptState, SCROLL_SPEED};
pub use widget::TranscriptWidget;
