//! HTTP API client for the chat service.
//!
//! The service exposes a single path: GET returns the conversation history
//! for the caller, POST submits a prompt and returns the generated answer.

use serde::{Deserialize, Serialize};

/// Base URL used when no configuration overrides it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// A single past turn as returned by the history endpoint.
///
/// The server also sends `id` and `ip_address` per entry; only the fields
/// the transcript needs are kept, the rest are ignored on deserialization.
/// Either field may be absent or null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The user's prompt, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// The generated response, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

/// Shape of a successful POST response.
#[derive(Debug, Clone, Deserialize)]
pub struct SendReply {
    /// The generated answer. Absent means the request failed server-side.
    #[serde(default)]
    pub answer: Option<String>,
}

/// Request body for the prompt endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    prompt: &'a str,
}

/// Errors from the chat service or transport.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx HTTP status.
    #[error("server returned HTTP {status}")]
    Http { status: u16 },

    /// Response JSON was well-formed but the `answer` field was missing.
    #[error("response did not contain an answer")]
    MissingAnswer,

    /// Response body was not the expected JSON.
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// Transport-level failure (connection refused, DNS, etc.).
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),
}

/// Client for the chat service.
///
/// No request timeout is configured: a hung request stays in flight until
/// the server closes the connection, matching the service's contract.
#[derive(Debug, Clone)]
pub struct ChatApi {
    client: reqwest::Client,
    base_url: String,
}

impl ChatApi {
    /// Create a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the conversation history.
    ///
    /// Returns the entries in server order. An empty vector means no prior
    /// conversation exists for this caller.
    pub async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        tracing::debug!(url = %self.base_url, "fetching history");

        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let entries: Vec<HistoryEntry> = response.json().await.map_err(ApiError::Decode)?;
        tracing::debug!(count = entries.len(), "history fetched");
        Ok(entries)
    }

    /// Submit a prompt and return the generated answer.
    pub async fn send_prompt(&self, prompt: &str) -> Result<String, ApiError> {
        tracing::debug!(url = %self.base_url, "sending prompt");

        let response = self
            .client
            .post(&self.base_url)
            .json(&SendRequest { prompt })
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let reply: SendReply = response.json().await.map_err(ApiError::Decode)?;
        reply.answer.ok_or(ApiError::MissingAnswer)
    }
}
