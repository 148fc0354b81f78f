//! BotConfig: TelegramConfig plus database and log paths. Use load() for env-based loading.

use dbot_core::DbotError;
use dbot_telegram::TelegramConfig;
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://bot_data.db";
pub const DEFAULT_LOG_FILE: &str = "logs/message-log-bot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// DATABASE_URL (sqlx SQLite URL)
    pub database_url: String,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides TELEGRAM_BOT_TOKEN / BOT_TOKEN if provided.
    /// Fails with [`DbotError::Config`] when no token is available.
    pub fn load(token: Option<String>) -> Result<Self, DbotError> {
        let telegram = TelegramConfig::from_env(token)?;
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let log_file = Self::log_file_from_env();

        Ok(Self {
            telegram,
            database_url,
            log_file,
        })
    }

    /// LOG_FILE or the default path. Readable before the rest of the config so load errors can be logged.
    pub fn log_file_from_env() -> String {
        env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<(), DbotError> {
        self.telegram.validate()?;
        if self.database_url.trim().is_empty() {
            return Err(DbotError::Config("DATABASE_URL is empty".to_string()));
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }
}
