//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use llm_client::LlmConfig;

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "relay-bot")]
#[command(about = "Telegram bot that relays messages to ChatGPT", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; flags override BOT_TOKEN / SESSION_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        session_token: Option<String>,
    },
}

/// Loads both configs from the environment; given tokens override the env values.
pub fn load_config(
    token: Option<String>,
    session_token: Option<String>,
) -> Result<(BotConfig, LlmConfig)> {
    let bot = BotConfig::load(token)?;
    let llm = LlmConfig::from_env(session_token)?;
    Ok((bot, llm))
}
