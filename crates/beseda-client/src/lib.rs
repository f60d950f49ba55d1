//! beseda-client: Headless client for the beseda chat service
//!
//! This crate provides everything below the UI, including:
//! - Wire types for the history and prompt endpoints
//! - An HTTP API client over reqwest
//! - The transcript model (roles, messages, history flattening)
//! - Configuration loading and saving

pub mod api;
pub mod config;
pub mod transcript;

// Re-export commonly used types
pub use api::{ApiError, ChatApi, HistoryEntry, SendReply, DEFAULT_BASE_URL};
pub use config::{Config, ConfigError, CONFIG_PATH};
pub use transcript::{flatten_history, Message, Role};

/// Returns the client version.
pub fn client_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
