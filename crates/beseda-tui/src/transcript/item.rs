//! Transcript item types.
//!
//! An item is either a chat bubble (user or assistant) or an inline error
//! banner. The busy indicator is not an item; it is a flag on the state and
//! always renders after the last item.

use beseda_client::{Message, Role};

/// Placeholder shown when the loaded history is empty.
pub const WELCOME_PLACEHOLDER: &str = "Начните общение с AI ассистентом";

/// Banner shown when the history fetch fails.
pub const HISTORY_ERROR_BANNER: &str =
    "Не удалось загрузить историю чата. Проверьте подключение к серверу.";

/// Banner shown when a send fails for any reason.
pub const SEND_ERROR_BANNER: &str = "Ошибка при отправке сообщения. Проверьте подключение к серверу.";

/// Placeholder shown in the empty input field.
pub const INPUT_PLACEHOLDER: &str = "Введите сообщение...";

/// A single renderable row group in the transcript.
#[derive(Debug, Clone)]
pub enum TranscriptItem {
    /// A chat bubble, aligned by its role.
    Bubble(Message),
    /// A full-width inline error banner.
    ErrorBanner(String),
}

impl TranscriptItem {
    /// Whether this item renders right-aligned (user bubbles only).
    pub fn is_right_aligned(&self) -> bool {
        matches!(self, Self::Bubble(msg) if msg.role == Role::User)
    }

    /// The raw text of this item.
    pub fn text(&self) -> &str {
        match self {
            Self::Bubble(msg) => &msg.text,
            Self::ErrorBanner(text) => text,
        }
    }

    /// Content lines, split on literal newlines.
    pub fn content_lines(&self) -> Vec<&str> {
        self.text().lines().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_by_role() {
        assert!(TranscriptItem::Bubble(Message::user("hi")).is_right_aligned());
        assert!(!TranscriptItem::Bubble(Message::assistant("hello")).is_right_aligned());
        assert!(!TranscriptItem::ErrorBanner("oops".into()).is_right_aligned());
    }

    #[test]
    fn test_content_lines_split_on_newline() {
        let item = TranscriptItem::Bubble(Message::assistant("line one\nline two"));
        assert_eq!(item.content_lines(), vec!["line one", "line two"]);
    }

    #[test]
    fn test_banner_text() {
        let item = TranscriptItem::ErrorBanner(SEND_ERROR_BANNER.into());
        assert_eq!(item.text(), SEND_ERROR_BANNER);
    }
}
