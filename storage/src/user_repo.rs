//! User repository: idempotent upsert and lookups on the `users` table.

use crate::models::UserRecord;
use crate::sqlite_pool::SqlitePoolManager;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

#[derive(Clone)]
pub struct UserRepository {
    pool_manager: SqlitePoolManager,
}

impl UserRepository {
    /// Wraps an existing pool. Call [`UserRepository::init`] once before use.
    pub fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    pub async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating users table if not exist");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                user_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                username TEXT,
                first_seen TEXT NOT NULL,
                last_seen TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;

        Ok(())
    }

    /// Inserts the user, or refreshes name/username/last_seen if the id already exists.
    /// `first_seen` is only written on insert.
    pub async fn upsert(
        &self,
        user_id: i64,
        name: &str,
        username: Option<&str>,
        seen_at: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO users (user_id, name, username, first_seen, last_seen)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                name = excluded.name,
                username = excluded.username,
                last_seen = excluded.last_seen
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(username)
        .bind(seen_at)
        .bind(seen_at)
        .execute(self.pool_manager.pool())
        .await?;

        debug!(user_id = user_id, name = %name, "Upserted user");
        Ok(())
    }

    pub async fn get_by_id(&self, user_id: i64) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            "SELECT user_id, name, username, first_seen, last_seen FROM users WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(self.pool_manager.pool())
        .await
    }

    /// Total number of known users.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count.0)
    }
}
