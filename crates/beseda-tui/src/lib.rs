//! beseda-tui: Terminal UI for the beseda chat client
//!
//! This crate provides the TUI layer, including:
//! - The chat pane (transcript bubbles + input bar)
//! - App state for the load/send request cycle
//! - The terminal event loop over spawned network tasks

mod app;
mod event;
pub mod text;
#[cfg(test)]
pub mod test_utils;
mod theme;
mod transcript;
mod widgets;

pub use app::{App, HistoryState, SendState};
pub use beseda_client;
pub use event::{Action, Event, EventHandler};
pub use theme::Theme;
pub use transcript::{TranscriptItem, TranscriptState, TranscriptWidget};
pub use widgets::{ChatPane, InputBar, TextInputState};

use beseda_client::{ApiError, ChatApi, HistoryEntry};
use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
    Frame, Terminal,
};
use std::io::{self, stdout};
use tokio::task::JoinHandle;

/// Key hints shown in the footer.
const FOOTER_HINTS: &str = "Enter — отправить · Ctrl+Enter — новая строка · Esc — выход";

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application against the given API client.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(api: ChatApi) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    // Create event handler (4 Hz tick rate = 250ms)
    let mut events = EventHandler::new(250);

    // Main loop
    let result = run_loop(&mut terminal, &mut app, &mut events, &api).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

/// Render one frame of the chat UI.
fn draw_frame(frame: &mut Frame<'_>, app: &App, theme: &Theme, endpoint: &str) {
    let area = frame.area();
    let buf = frame.buffer_mut();

    if area.height == 0 {
        return;
    }

    // Chat pane fills everything above a one-line footer
    let pane_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
    let footer_area = Rect::new(area.x, area.y + pane_area.height, area.width, 1);

    ChatPane::new(&app.transcript, &app.input, theme)
        .tick(app.tick)
        .placeholder(app.show_placeholder())
        .input_enabled(app.input_enabled())
        .endpoint(endpoint)
        .render(pane_area, buf);

    if footer_area.height > 0 {
        let hints = text::truncate_to_width(FOOTER_HINTS, area.width as usize);
        Paragraph::new(Line::from(hints))
            .style(Style::default().fg(theme.muted))
            .render(footer_area, buf);
    }
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    api: &ChatApi,
) -> Result<(), Box<dyn std::error::Error>> {
    let theme = Theme::default();

    // Kick off the startup history fetch
    let mut history_handle: Option<JoinHandle<Result<Vec<HistoryEntry>, ApiError>>> = Some({
        let api = api.clone();
        tokio::spawn(async move { api.fetch_history().await })
    });

    // In-flight send tasks (at most one, enforced by input disabling)
    let mut send_handles: Vec<JoinHandle<Result<String, ApiError>>> = Vec::new();

    loop {
        terminal.draw(|frame| draw_frame(frame, app, &theme, api.base_url()))?;

        // Check for a completed history fetch (non-blocking)
        if history_handle.as_ref().is_some_and(JoinHandle::is_finished) {
            if let Some(handle) = history_handle.take() {
                if let Ok(result) = handle.await {
                    app.finish_history_load(result);
                }
            }
        }

        // Check for completed sends (non-blocking)
        let mut completed = Vec::new();
        for (i, handle) in send_handles.iter().enumerate() {
            if handle.is_finished() {
                completed.push(i);
            }
        }
        for i in completed.into_iter().rev() {
            if let Ok(result) = send_handles.remove(i).await {
                app.finish_send(result);
            }
        }

        // Handle events
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    if app.input_enabled() && handle_input_key(app, key, api, &mut send_handles) {
                        continue; // Key was consumed by the text input
                    }
                    let action = event::key_to_action(key);
                    app.handle_action(action);
                }
                Event::Mouse(mouse) => {
                    use crossterm::event::MouseEventKind;
                    match mouse.kind {
                        MouseEventKind::ScrollUp => {
                            app.transcript.scroll_up(transcript::SCROLL_SPEED);
                        }
                        MouseEventKind::ScrollDown => {
                            app.transcript.scroll_down(transcript::SCROLL_SPEED);
                        }
                        _ => {}
                    }
                }
                Event::Tick => {
                    app.tick();
                }
                Event::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        if app.should_quit {
            // Abort any remaining tasks
            if let Some(handle) = history_handle {
                handle.abort();
            }
            for handle in send_handles {
                handle.abort();
            }
            break;
        }
    }

    Ok(())
}

/// Handle a key for the text input.
///
/// Returns true if the key was consumed (should not be processed as an
/// action). Enter submits; Ctrl+Enter inserts a newline, the terminal
/// stand-in for Shift+Enter.
fn handle_input_key(
    app: &mut App,
    key: crossterm::event::KeyEvent,
    api: &ChatApi,
    send_handles: &mut Vec<JoinHandle<Result<String, ApiError>>>,
) -> bool {
    // Ctrl+Enter inserts a newline
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Enter {
        app.input.insert('\n');
        return true;
    }

    // Other control chords (Ctrl+C etc.) belong to the action handler
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Esc => false,

        // Enter sends the message
        KeyCode::Enter => {
            if let Some(text) = app.submit_input() {
                let api = api.clone();
                let handle = tokio::spawn(async move { api.send_prompt(&text).await });
                send_handles.push(handle);
            }
            true
        }

        // Text input
        KeyCode::Char(c) => {
            app.input.insert(c);
            true
        }
        KeyCode::Backspace => {
            app.input.backspace();
            true
        }
        KeyCode::Delete => {
            app.input.delete();
            true
        }
        KeyCode::Left => {
            app.input.move_left();
            true
        }
        KeyCode::Right => {
            app.input.move_right();
            true
        }
        KeyCode::Home => {
            if app.input.is_empty() {
                false // Let the action handler jump the transcript
            } else {
                app.input.move_home();
                true
            }
        }
        KeyCode::End => {
            if app.input.is_empty() {
                false
            } else {
                app.input.move_end();
                true
            }
        }
        KeyCode::Up => {
            // History navigation when the input is empty
            if app.input.is_empty() {
                app.input.history_prev();
                true
            } else {
                false // Let the action handler scroll the transcript
            }
        }
        KeyCode::Down => {
            if app.input.is_empty() {
                app.input.history_next();
                true
            } else {
                false
            }
        }

        _ => false,
    }
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}


#[cfg(test)]
mod frame_tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_terminal_sized};
    use beseda_client::HistoryEntry;

    fn render_app_to_string(app: &App, width: u16, height: u16) -> String {
        let theme = Theme::default();
        let mut terminal = create_test_terminal_sized(width, height);
        terminal
            .draw(|frame| draw_frame(frame, app, &theme, "http://localhost:8000"))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_frame_shows_loaded_history() {
        let mut app = App::new();
        app.finish_history_load(Ok(vec![HistoryEntry {
            prompt: Some("hi".into()),
            response: Some("hello".into()),
        }]));

        let content = render_app_to_string(&app, 60, 20);
        assert!(content.contains("hi"));
        assert!(content.contains("hello"));
        assert!(!content.contains(transcript::WELCOME_PLACEHOLDER));
    }

    #[test]
    fn test_frame_shows_welcome_for_empty_history() {
        let mut app = App::new();
        app.finish_history_load(Ok(vec![]));

        let content = render_app_to_string(&app, 60, 20);
        assert!(content.contains(transcript::WELCOME_PLACEHOLDER));
    }

    #[test]
    fn test_frame_shows_banner_on_failed_history() {
        let mut app = App::new();
        app.finish_history_load(Err(beseda_client::ApiError::Http { status: 500 }));

        let content = render_app_to_string(&app, 70, 20);
        assert!(content.contains("Не удалось загрузить историю"));
    }

    #[test]
    fn test_frame_shows_busy_while_sending() {
        let mut app = App::new();
        app.finish_history_load(Ok(vec![]));
        app.input.insert_str("вопрос");
        app.submit_input();

        let content = render_app_to_string(&app, 60, 20);
        assert!(content.contains("вопрос"));
        assert!(content.contains('●'));
    }

    #[test]
    fn test_frame_fits_tiny_terminal() {
        let app = App::new();
        // Should not panic
        let _ = render_app_to_string(&app, 10, 3);
    }
}
