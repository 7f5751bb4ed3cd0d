//! LLM configuration loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Connection settings for the OpenAI-compatible backend.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// SESSION_TOKEN; sent as the bearer credential.
    pub session_token: String,
    /// OPENAI_BASE_URL
    pub base_url: String,
    /// MODEL
    pub model: String,
    /// LLM_SYSTEM_PROMPT or SYSTEM_PROMPT; blank values are ignored.
    pub system_prompt: Option<String>,
}

impl LlmConfig {
    /// Loads from env. `session_token` overrides SESSION_TOKEN if provided.
    pub fn from_env(session_token: Option<String>) -> Result<Self> {
        let session_token = match session_token {
            Some(t) => t,
            None => env::var("SESSION_TOKEN").context("SESSION_TOKEN not set")?,
        };
        if session_token.trim().is_empty() {
            anyhow::bail!("SESSION_TOKEN is empty");
        }
        let base_url = env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let system_prompt = env::var("LLM_SYSTEM_PROMPT")
            .or_else(|_| env::var("SYSTEM_PROMPT"))
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            session_token,
            base_url,
            model,
            system_prompt,
        })
    }

    /// Config with the given token and defaults for everything else.
    pub fn with_token(session_token: impl Into<String>) -> Self {
        Self {
            session_token: session_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
