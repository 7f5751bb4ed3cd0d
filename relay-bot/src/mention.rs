//! Pure functions for @-mention gating and stripping.

use crate::core::ChatKind;

/// `@<bot_username>`.
#[inline]
pub fn mention_of(bot_username: &str) -> String {
    format!("@{}", bot_username)
}

/// True if a message with `text` in a chat of `kind` is addressed to the bot.
/// Private chats always are; group chats only when the text starts with the exact mention.
pub fn is_addressed_to_bot(text: &str, kind: ChatKind, bot_username: &str) -> bool {
    !kind.requires_mention() || text.starts_with(&mention_of(bot_username))
}

/// Removes the first `@<bot_username>` from `text` and trims the result.
#[inline]
pub fn strip_mention(text: &str, bot_username: &str) -> String {
    text.replacen(&mention_of(bot_username), "", 1)
        .trim()
        .to_string()
}

/// The prompt to relay, or `None` when the message is not for the bot or is empty after stripping.
pub fn resolve_prompt(text: &str, kind: ChatKind, bot_username: &str) -> Option<String> {
    if !is_addressed_to_bot(text, kind, bot_username) {
        return None;
    }
    let prompt = strip_mention(text, bot_username);
    (!prompt.is_empty()).then_some(prompt)
}
