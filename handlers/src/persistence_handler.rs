//! Handler that logs plain text messages to storage and acknowledges them.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use storage::{MessageLog, UserLocks};
use tracing::{info, instrument};

use crate::command::Command;
use crate::failure::storage_failure;
use crate::replies;

/// Upserts the sender, then appends the message, under the sender's lock.
///
/// Non-text messages and commands pass through untouched (Continue).
#[derive(Clone)]
pub struct PersistenceHandler {
    log: Arc<dyn MessageLog>,
    locks: UserLocks,
}

impl PersistenceHandler {
    pub fn new(log: Arc<dyn MessageLog>, locks: UserLocks) -> Self {
        Self { log, locks }
    }
}

#[async_trait]
impl Handler for PersistenceHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.has_text() || Command::is_command(&message.content) {
            return Ok(HandlerResponse::Continue);
        }

        let user = &message.user;
        let _guard = self.locks.acquire(user.id).await;

        if let Err(e) = self
            .log
            .upsert_user(
                user.id,
                &user.display_name(),
                user.username.as_deref(),
                message.created_at,
            )
            .await
        {
            return Ok(storage_failure(e, message, "upsert_user"));
        }

        match self
            .log
            .record_message(user.id, &message.content, message.created_at)
            .await
        {
            Ok(id) => {
                info!(
                    user_id = user.id,
                    record_id = id,
                    "step: PersistenceHandler message saved"
                );
                Ok(HandlerResponse::Reply(replies::message_saved(&message.content)))
            }
            Err(e) => Ok(storage_failure(e, message, "record_message")),
        }
    }
}
