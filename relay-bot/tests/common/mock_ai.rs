//! Scripted AI backend: conversations replay partial results (with optional pauses) and then
//! return a fixed reply or error.

use anyhow::Result;
use async_trait::async_trait;
use llm_client::{AiBackend, Conversation, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One step of a scripted reply.
#[derive(Debug, Clone)]
pub enum Step {
    /// Reports this accumulated text through the progress callback.
    Partial(String),
    /// Sleeps (tokio time; use paused clocks in tests).
    Pause(Duration),
}

pub fn partial(text: &str) -> Step {
    Step::Partial(text.to_string())
}

pub struct MockConversation {
    id: String,
    script: Vec<Step>,
    outcome: std::result::Result<String, String>,
    received: Mutex<Vec<String>>,
}

impl MockConversation {
    /// Texts this conversation was asked, in order.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl Conversation for MockConversation {
    fn id(&self) -> &str {
        &self.id
    }

    async fn send_message(&self, text: &str, on_progress: &mut ProgressCallback) -> Result<String> {
        self.received.lock().unwrap().push(text.to_string());
        for step in &self.script {
            match step {
                Step::Partial(p) => on_progress(p.clone()).await,
                Step::Pause(d) => tokio::time::sleep(*d).await,
            }
        }
        self.outcome.clone().map_err(|e| anyhow::anyhow!(e))
    }
}

/// Backend whose conversations all follow the same script.
pub struct MockBackend {
    script: Vec<Step>,
    outcome: std::result::Result<String, String>,
    auth_error: Option<String>,
    created: Mutex<Vec<Arc<MockConversation>>>,
}

impl MockBackend {
    pub fn replying(reply: &str, script: Vec<Step>) -> Self {
        Self {
            script,
            outcome: Ok(reply.to_string()),
            auth_error: None,
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            script: Vec::new(),
            outcome: Err(error.to_string()),
            auth_error: None,
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting_auth(error: &str) -> Self {
        Self {
            auth_error: Some(error.to_string()),
            ..Self::replying("", Vec::new())
        }
    }

    /// Conversations created so far, oldest first.
    pub fn conversations(&self) -> Vec<Arc<MockConversation>> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiBackend for MockBackend {
    async fn ensure_auth(&self) -> Result<()> {
        match &self.auth_error {
            Some(e) => Err(anyhow::anyhow!(e.clone())),
            None => Ok(()),
        }
    }

    async fn refresh_access_token(&self) -> Result<()> {
        Ok(())
    }

    fn new_conversation(&self) -> Arc<dyn Conversation> {
        let mut created = self.created.lock().unwrap();
        let conversation = Arc::new(MockConversation {
            id: format!("conv-{}", created.len() + 1),
            script: self.script.clone(),
            outcome: self.outcome.clone(),
            received: Mutex::new(Vec::new()),
        });
        created.push(conversation.clone());
        conversation
    }
}
