//! Shared fakes for integration tests: a recording chat bot and a scripted AI backend.

#![allow(dead_code)]

pub mod mock_ai;
pub mod mock_bot;

use chrono::Utc;
use relay_bot::{Chat, ChatKind, Message, User};

pub const BOT_USERNAME: &str = "mybot";
pub const PRIVATE_CHAT_ID: i64 = 456;
pub const GROUP_CHAT_ID: i64 = -1001;

/// Inbound text message with id `message_id` in a chat of `kind`.
pub fn text_message(message_id: i32, kind: ChatKind, text: Option<&str>) -> Message {
    let chat_id = if kind.requires_mention() {
        GROUP_CHAT_ID
    } else {
        PRIVATE_CHAT_ID
    };
    Message {
        id: message_id,
        user: Some(User {
            id: 123,
            username: Some("user".to_string()),
            first_name: "User".to_string(),
        }),
        chat: Chat { id: chat_id, kind },
        text: text.map(str::to_string),
        created_at: Utc::now(),
    }
}
