//! Chat-platform surface consumed by the relay. Production wraps teloxide; tests substitute a recorder.

use async_trait::async_trait;

use super::error::Result;
use super::types::{Chat, Message, SentMessage};

/// Result of an edit call. Telegram answers with the edited message, or with `true` for messages
/// it does not return (inline messages).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Platform returned the message with its new state.
    Updated(SentMessage),
    /// Platform only confirmed success; keep the prior reference.
    Unchanged,
}

/// Outbound chat operations.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Username of the bot itself, without `@`. `None` when the account has none.
    async fn username(&self) -> Result<Option<String>>;

    /// Sends `text` to `chat`.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<SentMessage>;

    /// Sends `text` to the message's chat as a reply to that message.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<SentMessage>;

    /// Shows the "typing" indicator in `chat`.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;

    /// Replaces the text of a sent message; `markdown` requests rich-text parsing.
    async fn edit_message_text(
        &self,
        message: &SentMessage,
        text: &str,
        markdown: bool,
    ) -> Result<EditOutcome>;
}
