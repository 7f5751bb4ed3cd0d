//! Handlers run by the chain: slash-commands first, then the AI relay.

mod command;
mod relay;

pub use command::{Command, CommandHandler, HELP_REPLY, RELOAD_REPLY};
pub use relay::{RelayHandler, CONNECTION_TROUBLE_REPLY, THINKING_PLACEHOLDER, TOKEN_EXPIRED_REPLY};
