//! Process-wide slot holding the active AI conversation.
//!
//! Readers take an `Arc` snapshot and keep using it for the whole relay; `/reload` swaps the
//! slot's content. A relay already in flight finishes on the conversation it started with.

use llm_client::{AiBackend, Conversation};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Clone)]
pub struct ConversationSlot {
    backend: Arc<dyn AiBackend>,
    current: Arc<RwLock<Arc<dyn Conversation>>>,
}

impl ConversationSlot {
    /// Creates the slot with a first conversation from `backend`.
    pub fn open(backend: Arc<dyn AiBackend>) -> Self {
        let first = backend.new_conversation();
        info!(conversation_id = %first.id(), "Conversation initialized");
        Self {
            backend,
            current: Arc::new(RwLock::new(first)),
        }
    }

    /// Snapshot of the active conversation.
    pub async fn current(&self) -> Arc<dyn Conversation> {
        self.current.read().await.clone()
    }

    /// Replaces the active conversation with a fresh one and returns it.
    pub async fn reload(&self) -> Arc<dyn Conversation> {
        let fresh = self.backend.new_conversation();
        *self.current.write().await = fresh.clone();
        fresh
    }
}
