//! OpenAI-compatible backend: session-token auth and history-keeping conversations over async-openai.

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

use crate::{mask_token, AiBackend, Conversation, LlmConfig, ProgressCallback, SESSION_EXPIRED_MARKER};

/// `error.code` values OpenAI uses when it rejects the credential itself.
const AUTH_ERROR_CODES: &[&str] = &["invalid_api_key", "invalid_authentication", "token_expired"];

/// Prefix of the SSE client's error when the stream request is answered with 401.
const STREAM_UNAUTHORIZED: &str = "Invalid status code: 401";

/// Maps a client error to anyhow, tagging authentication rejections with [`SESSION_EXPIRED_MARKER`].
fn classify_error(e: OpenAIError) -> anyhow::Error {
    if is_auth_rejection(&e) {
        anyhow::anyhow!("{}: {}", SESSION_EXPIRED_MARKER, e)
    } else {
        anyhow::Error::new(e)
    }
}

/// Decided from the error's structure (API error code, HTTP status), never from free-text messages.
fn is_auth_rejection(e: &OpenAIError) -> bool {
    match e {
        OpenAIError::ApiError(api) => api
            .code
            .as_deref()
            .is_some_and(|code| AUTH_ERROR_CODES.contains(&code)),
        OpenAIError::Reqwest(err) => err.status().is_some_and(|s| s.as_u16() == 401),
        OpenAIError::StreamError(msg) => msg.starts_with(STREAM_UNAUTHORIZED),
        _ => false,
    }
}

/// Backend built from [`LlmConfig`]; every conversation shares the same HTTP client.
#[derive(Clone)]
pub struct OpenAiBackend {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    system_prompt: Option<String>,
    masked_token: String,
}

impl OpenAiBackend {
    pub fn new(config: &LlmConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.session_token.clone())
            .with_api_base(config.base_url.clone());
        Self {
            client: Arc::new(Client::with_config(openai_config)),
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
            masked_token: mask_token(&config.session_token),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl AiBackend for OpenAiBackend {
    #[instrument(skip(self))]
    async fn ensure_auth(&self) -> Result<()> {
        info!(session_token = %self.masked_token, "Checking AI session token");
        let models = self.client.models().list().await.map_err(classify_error)?;
        info!(model_count = models.data.len(), "AI session token accepted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn refresh_access_token(&self) -> Result<()> {
        let model = self
            .client
            .models()
            .retrieve(&self.model)
            .await
            .map_err(classify_error)?;
        info!(model = %model.id, owned_by = %model.owned_by, "AI access refreshed");
        Ok(())
    }

    fn new_conversation(&self) -> Arc<dyn Conversation> {
        let conversation = OpenAiConversation::new(
            self.client.clone(),
            self.model.clone(),
            self.system_prompt.clone(),
        );
        debug!(conversation_id = %conversation.id, "Conversation created");
        Arc::new(conversation)
    }
}

/// Conversation that replays its own user/assistant history on every request.
pub struct OpenAiConversation {
    id: String,
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    system_prompt: Option<String>,
    history: Mutex<Vec<ChatCompletionRequestMessage>>,
}

impl OpenAiConversation {
    fn new(client: Arc<Client<OpenAIConfig>>, model: String, system_prompt: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            client,
            model,
            system_prompt,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Number of messages (user + assistant) remembered so far.
    pub fn history_len(&self) -> usize {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn request_messages(
        &self,
        user_message: ChatCompletionRequestMessage,
    ) -> Result<Vec<ChatCompletionRequestMessage>> {
        let mut messages = Vec::new();
        if let Some(prompt) = &self.system_prompt {
            messages.push(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(prompt.clone())
                    .build()?
                    .into(),
            );
        }
        messages.extend(
            self.history
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .iter()
                .cloned(),
        );
        messages.push(user_message);
        Ok(messages)
    }

    fn remember(&self, user_message: ChatCompletionRequestMessage, reply: &str) -> Result<()> {
        let assistant: ChatCompletionRequestMessage = ChatCompletionRequestAssistantMessageArgs::default()
            .content(reply.to_string())
            .build()?
            .into();
        let mut history = self.history.lock().unwrap_or_else(|e| e.into_inner());
        history.push(user_message);
        history.push(assistant);
        Ok(())
    }
}

#[async_trait]
impl Conversation for OpenAiConversation {
    fn id(&self) -> &str {
        &self.id
    }

    #[instrument(skip(self, text, on_progress), fields(conversation_id = %self.id))]
    async fn send_message(&self, text: &str, on_progress: &mut ProgressCallback) -> Result<String> {
        let user_message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(text)
            .build()?
            .into();
        let messages = self.request_messages(user_message.clone())?;

        info!(
            model = %self.model,
            message_count = messages.len(),
            "Sending message to AI (streaming)"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages(messages)
            .build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            debug!(request_json = %json, "AI request JSON");
        }

        let mut stream = self
            .client
            .chat()
            .create_stream(request)
            .await
            .map_err(classify_error)?;

        let mut reply = String::new();
        while let Some(result) = stream.next().await {
            let chunk = result.map_err(classify_error)?;
            if let Some(ref u) = chunk.usage {
                info!(
                    prompt_tokens = u.prompt_tokens,
                    completion_tokens = u.completion_tokens,
                    total_tokens = u.total_tokens,
                    "AI stream usage"
                );
            }
            let Some(choice) = chunk.choices.first() else {
                continue;
            };
            if let Some(content) = &choice.delta.content {
                if !content.is_empty() {
                    reply.push_str(content);
                    on_progress(reply.clone()).await;
                }
            }
        }

        if reply.is_empty() {
            warn!("AI stream finished without content");
        }

        self.remember(user_message, &reply)?;
        Ok(reply)
    }
}
