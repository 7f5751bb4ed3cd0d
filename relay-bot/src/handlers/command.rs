//! `/reload` and `/help`.

use async_trait::async_trait;
use std::sync::Arc;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, instrument};

use crate::conversation::ConversationSlot;
use crate::core::{Bot, Handler, HandlerResponse, Inbound, Result};

pub const RELOAD_REPLY: &str = "🔄 Conversation has been reset, enjoy!";
pub const HELP_REPLY: &str = "🤖 This is a chatbot powered by ChatGPT. You can use the following commands:\n\n/reload - Reset the conversation\n/help - Show this message";

/// Commands understood by the bot. The derive supplies the menu registered with `setMyCommands`.
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Reset the conversation")]
    Reload,
    #[command(description = "Show this message")]
    Help,
}

impl Command {
    /// Exact, whole-text match. `/reload@bot` or `/reload now` are not commands.
    pub fn from_exact(text: &str) -> Option<Self> {
        match text {
            "/reload" => Some(Command::Reload),
            "/help" => Some(Command::Help),
            _ => None,
        }
    }
}

/// Matches the raw message text against [`Command`]; stops the chain when it runs one.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    conversations: ConversationSlot,
}

impl CommandHandler {
    pub fn new(bot: Arc<dyn Bot>, conversations: ConversationSlot) -> Self {
        Self { bot, conversations }
    }

    async fn reply(&self, inbound: &Inbound, text: &str) {
        if let Err(e) = self.bot.send_message(&inbound.message.chat, text).await {
            error!(error = %e, chat_id = inbound.message.chat.id, "Failed to send command reply");
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, inbound), fields(chat_id = inbound.message.chat.id))]
    async fn handle(&self, inbound: &Inbound) -> Result<HandlerResponse> {
        let Some(command) = Command::from_exact(inbound.raw_text()) else {
            return Ok(HandlerResponse::Continue);
        };
        match command {
            Command::Reload => {
                let fresh = self.conversations.reload().await;
                self.reply(inbound, RELOAD_REPLY).await;
                info!(conversation_id = %fresh.id(), "Conversation has been reset");
            }
            Command::Help => {
                self.reply(inbound, HELP_REPLY).await;
            }
        }
        Ok(HandlerResponse::Stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_text_is_a_command() {
        assert_eq!(Command::from_exact("/reload"), Some(Command::Reload));
        assert_eq!(Command::from_exact("/help"), Some(Command::Help));
        assert_eq!(Command::from_exact("/reload@mybot"), None);
        assert_eq!(Command::from_exact(" /help"), None);
        assert_eq!(Command::from_exact("/HELP"), None);
    }

    #[test]
    fn command_menu_lists_both_commands() {
        let names: Vec<String> = Command::bot_commands()
            .into_iter()
            .map(|c| c.command.trim_start_matches('/').to_string())
            .collect();
        assert_eq!(names, vec!["reload".to_string(), "help".to_string()]);
    }
}
