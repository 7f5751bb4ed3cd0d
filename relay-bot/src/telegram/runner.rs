//! REPL runner: converts teloxide messages to core::Message and dispatches each on its own task.

use crate::core::ToCoreMessage;
use crate::router::Router;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Long-polls Telegram and hands every message to `router`. Returns when the dispatcher stops.
#[instrument(skip(bot, router))]
pub async fn run_repl(bot: teloxide::Bot, router: Router) -> anyhow::Result<()> {
    info!(bot_username = %router.bot_username(), "Starting update polling");

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let router = router.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                chat_id = core_msg.chat.id,
                message_id = core_msg.id,
                has_text = core_msg.text.is_some(),
                "Received message"
            );

            // One task per message.
            tokio::spawn(async move {
                if let Err(e) = router.dispatch(&core_msg).await {
                    error!(error = %e, chat_id = core_msg.chat.id, "Message handling failed");
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
