//! AI relay: placeholder reply → streamed, throttled edits → final edit, or an error notice.

use async_trait::async_trait;
use llm_client::{is_session_expired, ProgressCallback};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{error, info, instrument, warn};

use crate::conversation::ConversationSlot;
use crate::core::{Bot, Chat, Handler, HandlerResponse, Inbound, Result, SentMessage};
use crate::editor::edit_message;
use crate::throttle::{LeadingThrottle, DEFAULT_PROGRESS_INTERVAL};

pub const THINKING_PLACEHOLDER: &str = "🤔";
pub const TOKEN_EXPIRED_REPLY: &str = "🔑 Token has expired, please update the token.";
pub const CONNECTION_TROUBLE_REPLY: &str =
    "🤖 Sorry, I'm having trouble connecting to the server, please try again later.";

/// Last link of the chain: relays the stripped text to the active conversation.
pub struct RelayHandler {
    bot: Arc<dyn Bot>,
    conversations: ConversationSlot,
    progress_interval: Duration,
    markdown: bool,
}

impl RelayHandler {
    pub fn new(bot: Arc<dyn Bot>, conversations: ConversationSlot) -> Self {
        Self {
            bot,
            conversations,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            markdown: true,
        }
    }

    /// Minimum time between two progress edits of the same placeholder.
    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Whether edits request Markdown rendering.
    pub fn with_markdown(mut self, markdown: bool) -> Self {
        self.markdown = markdown;
        self
    }

    async fn signal_typing(bot: &dyn Bot, chat: &Chat) {
        if let Err(e) = bot.send_typing(chat).await {
            warn!(error = %e, chat_id = chat.id, "Failed to send typing action");
        }
    }

    /// Progress callback: leading-edge throttled edit of the placeholder, then typing again.
    fn progress_callback(
        &self,
        chat: &Chat,
        placeholder: Arc<Mutex<SentMessage>>,
    ) -> Box<ProgressCallback> {
        let bot = self.bot.clone();
        let chat = chat.clone();
        let markdown = self.markdown;
        let mut throttle = LeadingThrottle::new(self.progress_interval);

        Box::new(move |partial: String| -> Pin<Box<dyn Future<Output = ()> + Send>> {
            if !throttle.try_fire(Instant::now()) {
                return Box::pin(async {});
            }
            let bot = bot.clone();
            let chat = chat.clone();
            let placeholder = placeholder.clone();
            Box::pin(async move {
                {
                    let mut current = placeholder.lock().await;
                    let updated = edit_message(bot.as_ref(), &current, &partial, markdown).await;
                    *current = updated;
                }
                Self::signal_typing(bot.as_ref(), &chat).await;
            })
        })
    }

    async fn notify_failure(&self, chat: &Chat, e: &anyhow::Error) {
        let text = e.to_string();
        error!(error = %text, chat_id = chat.id, "ChatGPT API error");
        let notice = if is_session_expired(&text) {
            TOKEN_EXPIRED_REPLY
        } else {
            CONNECTION_TROUBLE_REPLY
        };
        if let Err(e) = self.bot.send_message(chat, notice).await {
            error!(error = %e, chat_id = chat.id, "Failed to send error notice");
        }
    }
}

#[async_trait]
impl Handler for RelayHandler {
    #[instrument(skip(self, inbound), fields(chat_id = inbound.message.chat.id, message_id = inbound.message.id))]
    async fn handle(&self, inbound: &Inbound) -> Result<HandlerResponse> {
        let chat = &inbound.message.chat;
        let conversation = self.conversations.current().await;
        info!(
            conversation_id = %conversation.id(),
            message = %inbound.text,
            "Message from chat"
        );

        let placeholder = self
            .bot
            .reply_to(&inbound.message, THINKING_PLACEHOLDER)
            .await?;
        Self::signal_typing(self.bot.as_ref(), chat).await;

        let placeholder = Arc::new(Mutex::new(placeholder));
        let mut on_progress = self.progress_callback(chat, placeholder.clone());

        let response = match conversation
            .send_message(&inbound.text, on_progress.as_mut())
            .await
        {
            Ok(response) => response,
            Err(e) => {
                self.notify_failure(chat, &e).await;
                return Ok(HandlerResponse::Stop);
            }
        };

        {
            let mut current = placeholder.lock().await;
            let updated = edit_message(self.bot.as_ref(), &current, &response, self.markdown).await;
            *current = updated;
        }
        info!(response = %response, "Response");
        Ok(HandlerResponse::Reply(response))
    }
}
