//! Handler for bot commands: `/start`, `/help`, `/stats`.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use storage::{MessageLog, StorageError, UserLocks};
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::command::Command;
use crate::failure::storage_failure;
use crate::replies;

/// Answers commands; lets plain text through to the next handler.
///
/// `/start` and `/stats` upsert the sender first so a first-time `/stats` still creates the user.
#[derive(Clone)]
pub struct CommandHandler {
    log: Arc<dyn MessageLog>,
    locks: UserLocks,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandHandler {
    /// `bot_username` is filled by the runner once `getMe` succeeds; until then any `@bot` suffix is accepted.
    pub fn new(
        log: Arc<dyn MessageLog>,
        locks: UserLocks,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            log,
            locks,
            bot_username,
        }
    }

    async fn upsert_sender(&self, message: &Message) -> std::result::Result<(), StorageError> {
        let user = &message.user;
        self.log
            .upsert_user(
                user.id,
                &user.display_name(),
                user.username.as_deref(),
                message.created_at,
            )
            .await
    }

    async fn start(&self, message: &Message) -> HandlerResponse {
        let _guard = self.locks.acquire(message.user.id).await;
        match self.upsert_sender(message).await {
            Ok(()) => {
                info!(user_id = message.user.id, "User started the bot");
                HandlerResponse::Reply(replies::welcome(&message.user.display_name()))
            }
            Err(e) => storage_failure(e, message, "start"),
        }
    }

    async fn stats(&self, message: &Message) -> HandlerResponse {
        let _guard = self.locks.acquire(message.user.id).await;
        let count = match self.upsert_sender(message).await {
            Ok(()) => self.log.count_messages(message.user.id).await,
            Err(e) => Err(e),
        };
        match count {
            Ok(count) => {
                info!(user_id = message.user.id, count = count, "User requested stats");
                HandlerResponse::Reply(replies::stats(count))
            }
            Err(e) => storage_failure(e, message, "stats"),
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let bot_username = self.bot_username.read().await.clone();
        let Some(command) = Command::parse(&message.content, bot_username.as_deref()) else {
            return Ok(HandlerResponse::Continue);
        };

        let response = match command {
            Command::Start => self.start(message).await,
            Command::Help => HandlerResponse::Reply(replies::HELP.to_string()),
            Command::Stats => self.stats(message).await,
            Command::Unknown(name) => {
                info!(command = %name, "Unknown command");
                HandlerResponse::Reply(replies::unknown_command(&name))
            }
            Command::ForOtherBot => HandlerResponse::Stop,
        };
        Ok(response)
    }
}
