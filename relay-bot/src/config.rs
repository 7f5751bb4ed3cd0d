//! Bot-side configuration loaded from env: Telegram connectivity, logging, relay tuning.
//! AI settings live in [`llm_client::LlmConfig`].

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::throttle::DEFAULT_PROGRESS_INTERVAL;

pub const DEFAULT_LOG_FILE: &str = "logs/relay-bot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL (e.g. a local mock server)
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// PROGRESS_INTERVAL_MS: minimum time between progress edits of a placeholder
    pub progress_interval_ms: u64,
    /// EDIT_MARKDOWN: request Markdown rendering on edits
    pub edit_markdown: bool,
}

impl BotConfig {
    /// Loads from env. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let progress_interval_ms = env::var("PROGRESS_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PROGRESS_INTERVAL.as_millis() as u64);
        let edit_markdown = env::var("EDIT_MARKDOWN")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            progress_interval_ms,
            edit_markdown,
        })
    }

    /// Fails fast on values that would only break later (empty token, malformed API URL).
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "BOT_TOKEN",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
            "LOG_FILE",
            "PROGRESS_INTERVAL_MS",
            "EDIT_MARKDOWN",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
        assert_eq!(config.progress_interval(), Duration::from_millis(4000));
        assert!(config.edit_markdown);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("BOT_TOKEN", "custom_token");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
        env::set_var("LOG_FILE", "/tmp/relay.log");
        env::set_var("PROGRESS_INTERVAL_MS", "1500");
        env::set_var("EDIT_MARKDOWN", "false");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.telegram_api_url.as_deref(), Some("http://127.0.0.1:8081"));
        assert_eq!(config.log_file, "/tmp/relay.log");
        assert_eq!(config.progress_interval_ms, 1500);
        assert!(!config.edit_markdown);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_bot_token_fails() {
        clear_env();
        let err = BotConfig::load(None).unwrap_err();
        assert!(err.to_string().contains("BOT_TOKEN"));
    }

    #[test]
    #[serial]
    fn test_override_token_wins_over_env() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        let config = BotConfig::load(Some("override_token".to_string())).unwrap();
        assert_eq!(config.bot_token, "override_token");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_api_url() {
        clear_env();
        env::set_var("TELEGRAM_API_URL", "not a url");
        let config = BotConfig::load(Some("t".to_string())).unwrap();
        assert!(config.validate().is_err());
        clear_env();
    }
}
