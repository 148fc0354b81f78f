//! Turns storage failures into handler responses at the handler boundary.

use dbot_core::{HandlerResponse, Message};
use storage::StorageError;
use tracing::error;

use crate::replies;

/// Database failures are answered with the apology; a referential violation is an internal
/// invariant breach (users are always upserted first), so the event is dropped without a reply.
pub(crate) fn storage_failure(err: StorageError, message: &Message, step: &str) -> HandlerResponse {
    match err {
        StorageError::Referential { user_id } => {
            error!(
                user_id = user_id,
                message_id = %message.id,
                step = step,
                "Invariant violated: message recorded before its user, event dropped"
            );
            HandlerResponse::Stop
        }
        StorageError::Database(e) => {
            error!(
                error = %e,
                user_id = message.user.id,
                message_id = %message.id,
                step = step,
                "Storage failed, replying with apology"
            );
            HandlerResponse::Reply(replies::APOLOGY.to_string())
        }
    }
}
