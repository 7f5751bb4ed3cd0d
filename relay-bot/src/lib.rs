//! # Relay bot
//!
//! Telegram bot that forwards messages to a ChatGPT conversation and streams the reply back by
//! editing a placeholder message. Core types are transport-agnostic; `telegram` holds the teloxide
//! adapter and REPL runner.

pub mod chain;
pub mod cli;
pub mod config;
pub mod conversation;
pub mod core;
pub mod editor;
pub mod handlers;
pub mod mention;
pub mod router;
pub mod runner;
pub mod telegram;
pub mod throttle;

pub use cli::{load_config, Cli, Commands};
pub use core::{
    init_tracing, Bot, BotError, Chat, ChatKind, EditOutcome, Handler, HandlerResponse, Inbound,
    Message, Result, SentMessage, ToCoreMessage, ToCoreUser, User,
};
pub use chain::HandlerChain;
pub use config::BotConfig;
pub use conversation::ConversationSlot;
pub use editor::edit_message;
pub use handlers::{Command, CommandHandler, RelayHandler};
pub use mention::{is_addressed_to_bot, resolve_prompt, strip_mention};
pub use router::Router;
pub use runner::{build_handler_chain, build_router, resolve_bot_username, run_bot};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
pub use throttle::LeadingThrottle;
