//! Message repository: append-only inserts and per-user queries on the `messages` table.
//!
//! Rows reference `users(user_id)`; with foreign keys enabled an insert for an unknown user fails.

use crate::models::MessageRecord;
use crate::sqlite_pool::SqlitePoolManager;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
}

impl MessageRepository {
    /// Wraps an existing pool. The `users` table must exist before [`MessageRepository::init`].
    pub fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    pub async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating messages table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(user_id),
                text TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_messages_user_id ON messages(user_id)")
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Appends a message and returns the generated id.
    pub async fn insert(
        &self,
        user_id: i64,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO messages (user_id, text, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(text)
        .bind(created_at)
        .execute(self.pool_manager.pool())
        .await?;

        let id = result.last_insert_rowid();
        debug!(id = id, user_id = user_id, "Saved message");
        Ok(id)
    }

    pub async fn count_by_user(&self, user_id: i64) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count.0)
    }

    /// Most recent messages of a user, newest first.
    pub async fn get_recent_by_user(
        &self,
        user_id: i64,
        limit: i64,
    ) -> Result<Vec<MessageRecord>, sqlx::Error> {
        let messages = sqlx::query_as::<_, MessageRecord>(
            "SELECT id, user_id, text, created_at FROM messages WHERE user_id = ? ORDER BY id DESC LIMIT ?",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(self.pool_manager.pool())
        .await?;

        debug!(
            user_id = user_id,
            count = messages.len(),
            "Retrieved recent messages"
        );
        Ok(messages)
    }
}
