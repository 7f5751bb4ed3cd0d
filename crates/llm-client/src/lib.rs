//! # Conversational AI client
//!
//! Defines the [`AiBackend`] and [`Conversation`] traits and an OpenAI-compatible implementation.
//! Transport-agnostic; used by `relay-bot` to relay chat messages.
//!
//! The progress callback is boxed so that [`Conversation`] stays object-safe (dyn compatible).

use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

mod config;
mod mask;
mod openai_backend;

pub use config::LlmConfig;
pub use mask::mask_token;
pub use openai_backend::{OpenAiBackend, OpenAiConversation};

/// Substring carried by errors caused by an expired or rejected session token.
pub const SESSION_EXPIRED_MARKER: &str = "session token has expired";

/// Type-erased progress callback. Receives the reply text accumulated so far.
pub type ProgressCallback =
    dyn FnMut(String) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send;

/// One dialogue session with the AI backend. Keeps its own context between messages.
#[async_trait]
pub trait Conversation: Send + Sync {
    /// Identifier of this session (for logs).
    fn id(&self) -> &str;

    /// Sends `text` within the session. `on_progress` is awaited with each partial reply;
    /// returns the complete reply.
    async fn send_message(&self, text: &str, on_progress: &mut ProgressCallback) -> Result<String>;
}

/// AI provider: authentication and conversation factory.
#[async_trait]
pub trait AiBackend: Send + Sync {
    /// Verifies the session token is accepted by the provider.
    async fn ensure_auth(&self) -> Result<()>;

    /// Refreshes (re-validates) access credentials.
    async fn refresh_access_token(&self) -> Result<()>;

    /// Starts a fresh conversation with empty context.
    fn new_conversation(&self) -> Arc<dyn Conversation>;
}

/// True when an error message reports an expired session token.
pub fn is_session_expired(error: &str) -> bool {
    error.contains(SESSION_EXPIRED_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_expired_is_detected_by_substring() {
        assert!(is_session_expired(
            "request failed: session token has expired (401)"
        ));
        assert!(!is_session_expired("connection reset by peer"));
        assert!(!is_session_expired("Session Token Has Expired"));
    }
}
