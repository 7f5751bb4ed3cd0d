//! Placeholder editing that never fails the caller.

use crate::core::{Bot, EditOutcome, SentMessage};
use tracing::{debug, error};

/// Telegram rejects edits that would not change the message; the text on screen is already right.
fn is_message_not_modified(error: &str) -> bool {
    error.contains("message is not modified") || error.contains("exactly the same")
}

/// Sets `message`'s text to `text` and returns the reference to keep using.
///
/// - Same text as shown now: no call, returns `message` unchanged.
/// - Platform returns the edited message: returns that.
/// - Platform only confirms, or the edit fails: returns `message` unchanged (failures are logged).
pub async fn edit_message(
    bot: &dyn Bot,
    message: &SentMessage,
    text: &str,
    markdown: bool,
) -> SentMessage {
    if message.text.as_deref() == Some(text) {
        debug!(message_id = message.message_id, "Edit skipped, text unchanged");
        return message.clone();
    }
    match bot.edit_message_text(message, text, markdown).await {
        Ok(EditOutcome::Updated(updated)) => updated,
        Ok(EditOutcome::Unchanged) => message.clone(),
        Err(e) if is_message_not_modified(&e.to_string()) => {
            debug!(message_id = message.message_id, "Edit skipped by platform, text unchanged");
            message.clone()
        }
        Err(e) => {
            error!(
                error = %e,
                chat_id = message.chat_id,
                message_id = message.message_id,
                "Edit message error"
            );
            message.clone()
        }
    }
}
