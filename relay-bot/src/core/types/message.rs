//! Inbound and outbound message types.

use chrono::{DateTime, Utc};

use super::{chat::Chat, user::User};

/// A message received from the chat platform.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: i32,
    pub user: Option<User>,
    pub chat: Chat,
    /// Text body; `None` for stickers, photos without caption, service messages.
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Reference to a message the bot sent, with the text it currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub message_id: i32,
    pub text: Option<String>,
}

/// A message addressed to the bot: the original plus its text with the @mention stripped.
#[derive(Debug, Clone)]
pub struct Inbound {
    pub message: Message,
    pub text: String,
}

impl Inbound {
    /// Raw text as the user typed it (mention included).
    pub fn raw_text(&self) -> &str {
        self.message.text.as_deref().unwrap_or_default()
    }
}
