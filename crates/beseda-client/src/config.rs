//! Configuration for the beseda client.
//!
//! Stored as JSON at `.beseda/config.json`. Every field has a default, so
//! a missing or partial file degrades gracefully.

use crate::api::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Relative path of the config file, under the working directory.
pub const CONFIG_PATH: &str = ".beseda/config.json";

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the chat service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Save configuration to a file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(dir: &Path) -> Self {
        Self::load(&dir.join(CONFIG_PATH)).unwrap_or_default()
    }
}

/// Errors from configuration handling.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing the file.
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// File exists but is not valid JSON for the schema.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Serialization failed.
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}
