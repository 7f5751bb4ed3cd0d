use crate::core::{Chat, ChatKind, Message, SentMessage, ToCoreMessage, ToCoreUser, User};

/// Telegram user → core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: self.0.first_name.clone(),
        }
    }
}

/// Telegram message → core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> TelegramMessageWrapper<'a> {
    fn chat_kind(&self) -> ChatKind {
        let chat = &self.0.chat;
        if chat.is_supergroup() {
            ChatKind::Supergroup
        } else if chat.is_group() {
            ChatKind::Group
        } else if chat.is_channel() {
            ChatKind::Channel
        } else {
            ChatKind::Private
        }
    }
}

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.0,
            user: self.0.from.as_ref().map(|u| TelegramUserWrapper(u).to_core()),
            chat: Chat {
                id: self.0.chat.id.0,
                kind: self.chat_kind(),
            },
            text: self.0.text().map(str::to_string),
            created_at: self.0.date,
        }
    }
}

/// Reference to a message the bot sent or edited.
pub fn sent_message_from(message: &teloxide::types::Message) -> SentMessage {
    SentMessage {
        chat_id: message.chat.id.0,
        message_id: message.id.0,
        text: message.text().map(str::to_string),
    }
}
