//! Core types and traits: Bot, Handler, Message, HandlerResponse, error, logger.
//! Transport-agnostic; the Telegram layer converts into these types.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, EditOutcome};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, ChatKind, Handler, HandlerResponse, Inbound, Message, SentMessage, ToCoreMessage,
    ToCoreUser, User,
};
