//! Builds the handler chain and runs the bot until polling stops.

use anyhow::Result;
use dbot_core::Bot;
use dbot_telegram::{run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use handlers::{CommandHandler, LoggingHandler, PersistenceHandler};
use std::sync::Arc;
use storage::{MessageLog, SqliteMessageLog, UserLocks};
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::config::BotConfig;

/// Builds the chain: logging → commands → plain-message persistence.
///
/// Both storage-facing handlers share `locks` so a user's events are serialized across them.
pub fn build_handler_chain(
    log: Arc<dyn MessageLog>,
    locks: UserLocks,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(
            log.clone(),
            locks.clone(),
            bot_username,
        )))
        .add_handler(Arc::new(PersistenceHandler::new(log, locks)))
}

/// Main entry: validate config, open storage, build the chain, then poll until stopped.
/// Expects tracing to be initialized. The database is opened once here and closed after polling
/// ends, when no update is still being handled.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    info!(database_url = %config.database_url, "Initializing bot");

    let log = Arc::new(SqliteMessageLog::new(&config.database_url).await?);
    let bot_username = Arc::new(RwLock::new(None));
    let chain = build_handler_chain(log.clone(), UserLocks::new(), bot_username.clone());

    let teloxide_bot = config.telegram.build_bot()?;
    let reply_bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    info!("Bot started successfully");
    let result = run_repl(teloxide_bot, chain, reply_bot, bot_username).await;

    log.close().await;
    info!("Database closed");
    result
}
