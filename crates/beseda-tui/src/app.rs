//! Application state and update logic for the beseda TUI.

use crate::event::Action;
use crate::transcript::{TranscriptState, HISTORY_ERROR_BANNER, SEND_ERROR_BANNER};
use crate::widgets::TextInputState;
use beseda_client::{flatten_history, ApiError, HistoryEntry, Message};

/// Items scrolled per Up/Down key press.
const KEY_SCROLL: usize = 1;

/// Items scrolled per page key press.
const PAGE_SCROLL: usize = 5;

/// Whether a send is in flight.
///
/// Entered on submit, exited unconditionally when the request settles.
/// While `Sending`, input is disabled, which is what keeps a second send
/// from starting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendState {
    #[default]
    Idle,
    Sending,
}

/// Progress of the startup history fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Application state.
#[derive(Debug, Default)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Transcript items, scroll position, and busy indicator.
    pub transcript: TranscriptState,

    /// Text input state.
    pub input: TextInputState,

    /// Whether a send is in flight.
    pub send_state: SendState,

    /// Startup history fetch progress.
    pub history_state: HistoryState,

    /// Tick counter for animations.
    pub tick: usize,

    /// Whether the welcome placeholder is shown (history loaded empty).
    /// Once shown it stays, like the welcome row of the original page.
    welcome: bool,
}

impl App {
    /// Create a new app instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the input accepts keystrokes.
    pub fn input_enabled(&self) -> bool {
        self.send_state == SendState::Idle
    }

    /// Whether the welcome placeholder is shown.
    pub fn show_placeholder(&self) -> bool {
        self.welcome
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Up => self.transcript.scroll_up(KEY_SCROLL),
            Action::Down => self.transcript.scroll_down(KEY_SCROLL),
            Action::PageUp => self.transcript.scroll_up(PAGE_SCROLL),
            Action::PageDown => self.transcript.scroll_down(PAGE_SCROLL),
            Action::JumpStart => self.transcript.jump_to_start(),
            Action::JumpEnd => self.transcript.jump_to_end(),
            Action::None => {}
        }
    }

    /// Submit the current input.
    ///
    /// Returns the prompt to send, or `None` when the input is disabled or
    /// holds only whitespace (a no-op: nothing is cleared, nothing rendered).
    /// On submit, in order: input is disabled, the user bubble is rendered
    /// optimistically, the input is cleared, the busy indicator shows after
    /// the latest message, and the transcript scrolls to the bottom.
    pub fn submit_input(&mut self) -> Option<String> {
        if !self.input_enabled() {
            return None;
        }

        let text = self.input.content().trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.send_state = SendState::Sending;
        self.transcript.push_message(Message::user(text.clone()));
        self.input.submit();
        self.transcript.set_busy();
        self.transcript.jump_to_end();

        Some(text)
    }

    /// Apply the outcome of a send.
    ///
    /// Success appends the answer bubble; any failure appends the fixed
    /// localized banner. Either way the busy indicator is hidden and input
    /// is re-enabled and refocused.
    pub fn finish_send(&mut self, result: Result<String, ApiError>) {
        self.transcript.clear_busy();

        match result {
            Ok(answer) => self.transcript.push_message(Message::assistant(answer)),
            Err(err) => {
                tracing::warn!(error = %err, "send failed");
                self.transcript.push_banner(SEND_ERROR_BANNER);
            }
        }

        self.transcript.jump_to_end();
        self.send_state = SendState::Idle;
    }

    /// Apply the outcome of the startup history fetch.
    ///
    /// A non-empty history becomes bubbles in server order; an empty one
    /// shows the welcome placeholder. Failures become an inline banner and
    /// never propagate; the UI stays interactive.
    pub fn finish_history_load(&mut self, result: Result<Vec<HistoryEntry>, ApiError>) {
        match result {
            Ok(entries) => {
                let messages = flatten_history(&entries);
                self.welcome = messages.is_empty();
                for message in messages {
                    self.transcript.push_message(message);
                }
                self.history_state = HistoryState::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "history load failed");
                self.transcript.push_banner(HISTORY_ERROR_BANNER);
                self.history_state = HistoryState::Failed;
            }
        }

        self.transcript.jump_to_end();
    }

    /// Increment the tick counter.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}
