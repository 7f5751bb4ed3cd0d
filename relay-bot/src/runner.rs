//! Startup: resolve bot identity, authenticate the AI backend, assemble the router, run the REPL.

use anyhow::{Context, Result};
use llm_client::{AiBackend, LlmConfig, OpenAiBackend};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, instrument, warn};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::conversation::ConversationSlot;
use crate::core::{init_tracing, Bot as CoreBot};
use crate::handlers::{Command, CommandHandler, RelayHandler};
use crate::router::Router;
use crate::telegram::{run_repl, TelegramBotAdapter};

/// Command handler first, relay last.
pub fn build_handler_chain(
    bot: Arc<dyn CoreBot>,
    conversations: ConversationSlot,
    config: &BotConfig,
) -> HandlerChain {
    let relay = RelayHandler::new(bot.clone(), conversations.clone())
        .with_progress_interval(config.progress_interval())
        .with_markdown(config.edit_markdown);
    HandlerChain::new()
        .add_handler(Arc::new(CommandHandler::new(bot, conversations)))
        .add_handler(Arc::new(relay))
}

/// Resolves the bot's username; an account without one cannot be mentioned and is rejected.
pub async fn resolve_bot_username(bot: &dyn CoreBot) -> Result<String> {
    let username = bot
        .username()
        .await
        .context("Failed to resolve bot identity")?
        .filter(|name| !name.is_empty());
    username.ok_or_else(|| anyhow::anyhow!("Bot username not found"))
}

/// Everything before polling starts. Any error here is fatal.
#[instrument(skip_all)]
pub async fn build_router(
    bot: Arc<dyn CoreBot>,
    backend: Arc<dyn AiBackend>,
    config: &BotConfig,
) -> Result<Router> {
    let username = resolve_bot_username(bot.as_ref()).await?;
    info!(bot = %format!("@{}", username), "Bot has started");

    backend.ensure_auth().await.context("ChatGPT API error")?;
    backend
        .refresh_access_token()
        .await
        .context("ChatGPT API error")?;
    info!("ChatGPT API has started");

    let conversations = ConversationSlot::open(backend);
    let chain = build_handler_chain(bot, conversations, config);
    Ok(Router::new(username, chain))
}

fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url.as_deref() {
        Some(url) => {
            let url = reqwest::Url::parse(url).context("Invalid TELEGRAM_API_URL")?;
            info!(api_url = %url, "Using custom Telegram API URL");
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Main entry: init logging, start up, register the command menu, then poll until stopped.
pub async fn run_bot(config: BotConfig, llm_config: LlmConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    let teloxide_bot = build_teloxide_bot(&config)?;
    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let backend: Arc<dyn AiBackend> = Arc::new(OpenAiBackend::new(&llm_config));

    let router = build_router(bot, backend, &config).await?;

    if let Err(e) = teloxide_bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register command menu");
    }

    run_repl(teloxide_bot, router).await
}
