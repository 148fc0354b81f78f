//! Integration tests for [`storage::SqliteMessageLog`] and its repositories.
//!
//! Uses in-memory SQLite (`sqlite::memory:`) unless a test needs a file on disk.

use chrono::{DateTime, Duration, TimeZone, Utc};
use storage::{MessageLog, SqliteMessageLog, StorageError};

async fn memory_log() -> SqliteMessageLog {
    SqliteMessageLog::new("sqlite::memory:")
        .await
        .expect("Failed to create message log")
}

fn at(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::seconds(secs)
}

/// **Test: repeated upserts keep exactly one row; last_seen follows the latest call, first_seen does not move.**
#[tokio::test]
async fn test_upsert_user_is_idempotent() {
    let log = memory_log().await;

    log.upsert_user(42, "Alice", Some("alice"), at(0)).await.unwrap();
    log.upsert_user(42, "Alice", Some("alice"), at(10)).await.unwrap();
    log.upsert_user(42, "Alice", Some("alice"), at(20)).await.unwrap();

    assert_eq!(log.users().count().await.unwrap(), 1);
    let user = log.users().get_by_id(42).await.unwrap().expect("user exists");
    assert_eq!(user.name, "Alice");
    assert_eq!(user.username.as_deref(), Some("alice"));
    assert_eq!(user.first_seen, at(0));
    assert_eq!(user.last_seen, at(20));
}

/// **Test: a later sighting overwrites name and username (including clearing the username).**
#[tokio::test]
async fn test_upsert_user_updates_profile_fields() {
    let log = memory_log().await;

    log.upsert_user(7, "Bob", Some("bobby"), at(0)).await.unwrap();
    log.upsert_user(7, "Robert", None, at(5)).await.unwrap();

    let user = log.users().get_by_id(7).await.unwrap().unwrap();
    assert_eq!(user.name, "Robert");
    assert!(user.username.is_none());
    assert_eq!(log.users().count().await.unwrap(), 1);
}

/// **Test: every record_message increments count_messages by exactly one, whatever the content.**
#[tokio::test]
async fn test_record_message_increments_count() {
    let log = memory_log().await;
    log.upsert_user(42, "Alice", None, at(0)).await.unwrap();

    let texts = ["hello", "", "hello", "🦀 unicode", "a much longer message with spaces"];
    for (i, text) in texts.iter().enumerate() {
        let before = log.count_messages(42).await.unwrap();
        log.record_message(42, text, at(i as i64)).await.unwrap();
        assert_eq!(log.count_messages(42).await.unwrap(), before + 1);
    }
    assert_eq!(log.count_messages(42).await.unwrap(), texts.len() as i64);
}

/// **Test: counts are per user.**
#[tokio::test]
async fn test_count_messages_is_per_user() {
    let log = memory_log().await;
    log.upsert_user(1, "One", None, at(0)).await.unwrap();
    log.upsert_user(2, "Two", None, at(0)).await.unwrap();

    log.record_message(1, "a", at(1)).await.unwrap();
    log.record_message(1, "b", at(2)).await.unwrap();
    log.record_message(2, "c", at(3)).await.unwrap();

    assert_eq!(log.count_messages(1).await.unwrap(), 2);
    assert_eq!(log.count_messages(2).await.unwrap(), 1);
}

/// **Test: count for a never-seen identifier is zero, not an error.**
#[tokio::test]
async fn test_count_messages_unknown_user_is_zero() {
    let log = memory_log().await;
    assert_eq!(log.count_messages(999).await.unwrap(), 0);
}

/// **Test: recording for a user without a row fails with Referential and stores nothing.**
#[tokio::test]
async fn test_record_message_without_user_is_referential_error() {
    let log = memory_log().await;

    let err = log.record_message(404, "orphan", at(0)).await.unwrap_err();
    assert!(matches!(err, StorageError::Referential { user_id: 404 }));
    assert_eq!(log.count_messages(404).await.unwrap(), 0);
}

/// **Test: sequence ids grow and recent messages come back newest first.**
#[tokio::test]
async fn test_recent_messages_newest_first() {
    let log = memory_log().await;
    log.upsert_user(42, "Alice", None, at(0)).await.unwrap();

    let first = log.record_message(42, "first", at(1)).await.unwrap();
    let second = log.record_message(42, "second", at(2)).await.unwrap();
    assert!(second > first);

    let recent = log.messages().get_recent_by_user(42, 10).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].text, "second");
    assert_eq!(recent[0].created_at, at(2));
    assert_eq!(recent[1].text, "first");
}

/// **Test: data in a file database survives closing and reopening.**
#[tokio::test]
async fn test_file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("bot_data.db").display());

    let log = SqliteMessageLog::new(&url).await.unwrap();
    log.upsert_user(42, "Alice", Some("alice"), at(0)).await.unwrap();
    log.record_message(42, "hello", at(1)).await.unwrap();
    log.close().await;

    let reopened = SqliteMessageLog::new(&url).await.unwrap();
    assert_eq!(reopened.count_messages(42).await.unwrap(), 1);
    assert_eq!(reopened.users().count().await.unwrap(), 1);
    reopened.close().await;
}

/// **Test: queries after close fail with a Database error instead of panicking.**
#[tokio::test]
async fn test_closed_pool_reports_database_error() {
    let log = memory_log().await;
    log.close().await;

    let err = log.count_messages(1).await.unwrap_err();
    assert!(matches!(err, StorageError::Database(_)));
}
