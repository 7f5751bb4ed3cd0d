//! Core types: user, chat, inbound and sent messages, handler response, and Handler trait.

mod chat;
mod handler;
mod message;
mod response;
mod user;

pub use chat::{Chat, ChatKind};
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::{Inbound, Message, SentMessage};
pub use response::HandlerResponse;
pub use user::User;
