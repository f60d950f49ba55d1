//! Shared widgets for the beseda TUI.

mod chat_pane;
mod text_input;

pub use chat_pane::ChatPane;
pub use text_input::{InputBar, TextInputState};
