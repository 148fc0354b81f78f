//! Bot configuration: Telegram connectivity + log file + database URL.

mod bot_config;


pub use bot_config::{BotConfig, DEFAULT_DATABASE_URL, DEFAULT_LOG_FILE};
