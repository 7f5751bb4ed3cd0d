//! Handler chain result type.

/// Handler result for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Message was not addressed to the bot; nothing ran.
    Ignore,
    /// Stop the chain and carry the reply text.
    Reply(String),
}
