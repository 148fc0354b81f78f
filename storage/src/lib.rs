//! Storage crate: user profiles and message log persisted in a single SQLite file.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – UserRecord, MessageRecord
//! - [`repository`] – MessageLog trait (upsert_user / record_message / count_messages)
//! - [`user_repo`] – UserRepository (`users` table)
//! - [`message_repo`] – MessageRepository (`messages` table)
//! - [`message_log`] – SqliteMessageLog, the MessageLog implementation over both repositories
//! - [`sqlite_pool`] – SqlitePoolManager
//! - [`user_locks`] – UserLocks, per-user serialization of storage access

mod error;
mod message_log;
mod message_repo;
mod models;
mod repository;
mod sqlite_pool;
mod user_locks;
mod user_repo;

pub use error::StorageError;
pub use message_log::SqliteMessageLog;
pub use message_repo::MessageRepository;
pub use models::{MessageRecord, UserRecord};
pub use repository::MessageLog;
pub use sqlite_pool::SqlitePoolManager;
pub use user_locks::UserLocks;
pub use user_repo::UserRepository;
