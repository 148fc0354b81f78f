//! SQLite-backed [`MessageLog`]: owns the pool and both repositories.
//!
//! Opened once at startup and shared behind `Arc<dyn MessageLog>`; [`SqliteMessageLog::close`] releases
//! the database at shutdown.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use crate::error::StorageError;
use crate::message_repo::MessageRepository;
use crate::repository::MessageLog;
use crate::sqlite_pool::SqlitePoolManager;
use crate::user_repo::UserRepository;

#[derive(Clone)]
pub struct SqliteMessageLog {
    pool_manager: SqlitePoolManager,
    users: UserRepository,
    messages: MessageRepository,
}

impl SqliteMessageLog {
    /// Opens (or creates) the database at `database_url` and creates the schema if missing.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let users = UserRepository::new(pool_manager.clone());
        let messages = MessageRepository::new(pool_manager.clone());

        users.init().await?;
        messages.init().await?;
        info!(database_url = %database_url, "Message log ready");

        Ok(Self {
            pool_manager,
            users,
            messages,
        })
    }

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    pub fn messages(&self) -> &MessageRepository {
        &self.messages
    }

    pub async fn close(&self) {
        self.pool_manager.close().await;
    }
}

#[async_trait]
impl MessageLog for SqliteMessageLog {
    #[instrument(skip(self, name, username, seen_at))]
    async fn upsert_user(
        &self,
        user_id: i64,
        name: &str,
        username: Option<&str>,
        seen_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        self.users
            .upsert(user_id, name, username, seen_at)
            .await
            .map_err(|e| StorageError::from_write(e, user_id))
    }

    #[instrument(skip(self, text, sent_at))]
    async fn record_message(
        &self,
        user_id: i64,
        text: &str,
        sent_at: DateTime<Utc>,
    ) -> Result<i64, StorageError> {
        self.messages
            .insert(user_id, text, sent_at)
            .await
            .map_err(|e| StorageError::from_write(e, user_id))
    }

    #[instrument(skip(self))]
    async fn count_messages(&self, user_id: i64) -> Result<i64, StorageError> {
        Ok(self.messages.count_by_user(user_id).await?)
    }
}
