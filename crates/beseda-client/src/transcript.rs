//! Transcript model: the ordered sequence of rendered chat bubbles.
//!
//! The wire format is a flat list of prompt/response pairs; the transcript
//! flattens it into individual messages with a role, preserving order.

use crate::api::HistoryEntry;
use chrono::{DateTime, Local, Utc};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The local user (rendered right-aligned).
    User,
    /// The remote assistant (rendered left-aligned).
    Assistant,
}

/// A single chat bubble.
///
/// Timestamps are assigned client-side when the message is appended; the
/// wire format carries none.
#[derive(Debug, Clone)]
pub struct Message {
    /// Message author.
    pub role: Role,
    /// Message text. Literal newlines produce line breaks in the bubble.
    pub text: String,
    /// When the message was appended locally.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a user message stamped now.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create an assistant message stamped now.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Timestamp formatted for display (HH:MM in local time).
    pub fn time_str(&self) -> String {
        let local: DateTime<Local> = self.timestamp.into();
        local.format("%H:%M").to_string()
    }
}

/// Flatten history entries into an ordered message list.
///
/// For each entry, the prompt (if present) becomes a user message and the
/// response (if present) an assistant message, in that order. Entries
/// missing a field contribute only the bubble they have.
pub fn flatten_history(entries: &[HistoryEntry]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(entries.len() * 2);
    for entry in entries {
        if let Some(prompt) = &entry.prompt {
            messages.push(Message::user(prompt.clone()));
        }
        if let Some(response) = &entry.response {
            messages.push(Message::assistant(response.clone()));
        }
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(prompt: Option<&str>, response: Option<&str>) -> HistoryEntry {
        HistoryEntry {
            prompt: prompt.map(String::from),
            response: response.map(String::from),
        }
    }

    #[test]
    fn test_flatten_preserves_order() {
        let entries = vec![
            entry(Some("hi"), Some("hello")),
            entry(Some("how are you"), Some("fine")),
        ];
        let messages = flatten_history(&entries);

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].text, "hi");
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].text, "hello");
        assert_eq!(messages[2].role, Role::User);
        assert_eq!(messages[2].text, "how are you");
        assert_eq!(messages[3].role, Role::Assistant);
        assert_eq!(messages[3].text, "fine");
    }

    #[test]
    fn test_flatten_missing_fields_omit_bubble_only() {
        let entries = vec![
            entry(Some("unanswered"), None),
            entry(None, Some("orphan answer")),
            entry(Some("q"), Some("a")),
        ];
        let messages = flatten_history(&entries);

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].text, "unanswered");
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].text, "orphan answer");
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[2].text, "q");
        assert_eq!(messages[3].text, "a");
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten_history(&[]).is_empty());
    }

    #[test]
    fn test_message_constructors() {
        let user = Message::user("hi");
        assert_eq!(user.role, Role::User);
        let assistant = Message::assistant("hello");
        assert_eq!(assistant.role, Role::Assistant);
    }

    #[test]
    fn test_time_str_format() {
        let msg = Message::user("hi");
        let time = msg.time_str();
        assert_eq!(time.len(), 5);
        assert!(time.contains(':'));
    }
}
