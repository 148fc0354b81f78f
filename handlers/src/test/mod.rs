//! Unit test module
//!
//! Handler unit tests live here, separate from source files.
//! Tests interact with handlers via public and pub(crate) APIs.


use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use dbot_core::{Chat, Message, User};
use std::sync::Arc;
use storage::{MessageLog, SqliteMessageLog, StorageError};

/// Builds a private-chat text message from user `user_id` ("Alice", @alice).
pub(crate) fn sample_message(user_id: i64, content: &str) -> Message {
    sample_message_at(user_id, content, Utc::now())
}

pub(crate) fn sample_message_at(user_id: i64, content: &str, at: DateTime<Utc>) -> Message {
    Message {
        id: format!("msg-{}", at.timestamp_nanos_opt().unwrap_or_default()),
        user: User {
            id: user_id,
            username: Some("alice".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: user_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: at,
    }
}

pub(crate) fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

pub(crate) async fn memory_log() -> Arc<SqliteMessageLog> {
    Arc::new(
        SqliteMessageLog::new("sqlite::memory:")
            .await
            .expect("Failed to create message log"),
    )
}

/// Storage whose every call fails like an unavailable disk.
pub(crate) struct FailingLog;

#[async_trait]
impl MessageLog for FailingLog {
    async fn upsert_user(
        &self,
        _user_id: i64,
        _name: &str,
        _username: Option<&str>,
        _seen_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        Err(StorageError::Database("disk I/O error".to_string()))
    }

    async fn record_message(
        &self,
        _user_id: i64,
        _text: &str,
        _sent_at: DateTime<Utc>,
    ) -> Result<i64, StorageError> {
        Err(StorageError::Database("disk I/O error".to_string()))
    }

    async fn count_messages(&self, _user_id: i64) -> Result<i64, StorageError> {
        Err(StorageError::Database("disk I/O error".to_string()))
    }
}

/// Storage that accepts users but rejects every message as referencing a missing user.
pub(crate) struct OrphanLog;

#[async_trait]
impl MessageLog for OrphanLog {
    async fn upsert_user(
        &self,
        _user_id: i64,
        _name: &str,
        _username: Option<&str>,
        _seen_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        Ok(())
    }

    async fn record_message(
        &self,
        user_id: i64,
        _text: &str,
        _sent_at: DateTime<Utc>,
    ) -> Result<i64, StorageError> {
        Err(StorageError::Referential { user_id })
    }

    async fn count_messages(&self, _user_id: i64) -> Result<i64, StorageError> {
        Ok(0)
    }
}
