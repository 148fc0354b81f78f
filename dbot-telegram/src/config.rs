//! Minimal Telegram config: bot token and optional Bot API URL.
//! Loaded from env: TELEGRAM_BOT_TOKEN (or BOT_TOKEN), TELEGRAM_API_URL (or TELOXIDE_API_URL).

use dbot_core::DbotError;
use std::env;

/// Telegram connectivity config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides the environment; a missing or blank token is a config error.
    pub fn from_env(token: Option<String>) -> Result<Self, DbotError> {
        let bot_token = token
            .or_else(|| env::var("TELEGRAM_BOT_TOKEN").ok())
            .or_else(|| env::var("BOT_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| DbotError::Config("TELEGRAM_BOT_TOKEN not set".to_string()))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Checks that `telegram_api_url`, when set, is a valid URL.
    pub fn validate(&self) -> Result<(), DbotError> {
        self.api_url().map(|_| ())
    }

    /// Creates the teloxide Bot, pointed at the custom API URL when one is configured.
    pub fn build_bot(&self) -> Result<teloxide::Bot, DbotError> {
        let api_url = self.api_url()?;
        let bot = teloxide::Bot::new(self.bot_token.clone());
        Ok(match api_url {
            Some(url) => bot.set_api_url(url),
            None => bot,
        })
    }

    fn api_url(&self) -> Result<Option<reqwest::Url>, DbotError> {
        self.telegram_api_url
            .as_deref()
            .map(|s| {
                reqwest::Url::parse(s).map_err(|_| {
                    DbotError::Config(format!(
                        "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                        s
                    ))
                })
            })
            .transpose()
    }
}
