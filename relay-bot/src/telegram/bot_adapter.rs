//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Tests substitute another Bot impl.

use crate::core::{Bot as CoreBot, BotError, Chat, EditOutcome, Message, Result, SentMessage};
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatAction, ChatId, MessageId, ParseMode, ReplyParameters},
    RequestError,
};

use super::adapters::sent_message_from;

fn transport(e: RequestError) -> BotError {
    BotError::Transport(e.to_string())
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn username(&self) -> Result<Option<String>> {
        let me = self.bot.get_me().await.map_err(transport)?;
        Ok(me.user.username.clone())
    }

    async fn send_message(&self, chat: &Chat, text: &str) -> Result<SentMessage> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(transport)?;
        Ok(sent_message_from(&sent))
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<SentMessage> {
        let sent = self
            .bot
            .send_message(ChatId(message.chat.id), text.to_string())
            .reply_parameters(ReplyParameters::new(MessageId(message.id)))
            .await
            .map_err(transport)?;
        Ok(sent_message_from(&sent))
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(transport)?;
        Ok(())
    }

    async fn edit_message_text(
        &self,
        message: &SentMessage,
        text: &str,
        markdown: bool,
    ) -> Result<EditOutcome> {
        let mut request = self.bot.edit_message_text(
            ChatId(message.chat_id),
            MessageId(message.message_id),
            text.to_string(),
        );
        if markdown {
            // Legacy Markdown: model output is sent unescaped.
            #[allow(deprecated)]
            {
                request = request.parse_mode(ParseMode::Markdown);
            }
        }
        let edited = request.await.map_err(transport)?;
        Ok(EditOutcome::Updated(sent_message_from(&edited)))
    }
}
