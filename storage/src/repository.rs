use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StorageError;

/// Persistence contract used by the bot handlers.
///
/// Callers must upsert the user before recording a message for it; `record_message` for an
/// unknown user fails with [`StorageError::Referential`].
#[async_trait]
pub trait MessageLog: Send + Sync {
    /// Creates the user row if absent; otherwise updates name, username and last-seen.
    async fn upsert_user(
        &self,
        user_id: i64,
        name: &str,
        username: Option<&str>,
        seen_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// Appends a message for an existing user and returns its sequence id.
    async fn record_message(
        &self,
        user_id: i64,
        text: &str,
        sent_at: DateTime<Utc>,
    ) -> Result<i64, StorageError>;

    /// Number of stored messages for the user; 0 for a user never seen.
    async fn count_messages(&self, user_id: i64) -> Result<i64, StorageError>;
}
