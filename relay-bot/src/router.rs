//! Message router: gates group messages on the bot mention, strips it, and runs the handler chain.

use crate::chain::HandlerChain;
use crate::core::{HandlerResponse, Inbound, Message, Result};
use crate::mention::resolve_prompt;
use tracing::{debug, instrument};

/// Routes inbound messages for one bot identity.
#[derive(Clone)]
pub struct Router {
    bot_username: String,
    chain: HandlerChain,
}

impl Router {
    pub fn new(bot_username: impl Into<String>, chain: HandlerChain) -> Self {
        Self {
            bot_username: bot_username.into(),
            chain,
        }
    }

    pub fn bot_username(&self) -> &str {
        &self.bot_username
    }

    /// Runs the chain for `message` if it is addressed to the bot; otherwise returns
    /// [`HandlerResponse::Ignore`] without side effects.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = message.id))]
    pub async fn dispatch(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(text) = message.text.as_deref() else {
            debug!("Ignored: no text body");
            return Ok(HandlerResponse::Ignore);
        };
        let Some(prompt) = resolve_prompt(text, message.chat.kind, &self.bot_username) else {
            debug!(chat_kind = ?message.chat.kind, "Ignored: not addressed to bot or empty");
            return Ok(HandlerResponse::Ignore);
        };
        let inbound = Inbound {
            message: message.clone(),
            text: prompt,
        };
        self.chain.handle(&inbound).await
    }
}
