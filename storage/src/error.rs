//! Storage error types.
//!
//! Used by repository implementations and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O or SQL failure on the embedded database.
    #[error("Database error: {0}")]
    Database(String),
    /// A message was written for a user that has no row in `users`.
    #[error("Referential error: user {user_id} does not exist")]
    Referential { user_id: i64 },
}

impl StorageError {
    /// Classifies a sqlx error raised while writing rows owned by `user_id`.
    pub(crate) fn from_write(err: sqlx::Error, user_id: i64) -> Self {
        if is_foreign_key_violation(&err) {
            StorageError::Referential { user_id }
        } else {
            StorageError::Database(err.to_string())
        }
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_foreign_key_violation()
                || db_err.message().contains("FOREIGN KEY constraint failed")
        }
        _ => false,
    }
}
