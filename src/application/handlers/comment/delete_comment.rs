//! DeleteCommentHandler - Command handler for soft-deleting a comment.
//!
//! Steps run strictly in order and the first failure aborts the rest:
//! user exists, comment is live, thread exists, caller owns the comment,
//! then the soft-delete itself.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::comment::DeleteComment;
use crate::domain::foundation::DomainError;
use crate::ports::{CommentRepository, ThreadRepository, UserRepository};

/// Handler for deleting comments.
pub struct DeleteCommentHandler {
    users: Arc<dyn UserRepository>,
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl DeleteCommentHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            users,
            threads,
            comments,
        }
    }

    /// Returns the number of comments whose delete flag was flipped.
    ///
    /// A second delete of the same comment stops at the availability check,
    /// so `0` only surfaces when a concurrent request deleted it first.
    #[tracing::instrument(name = "delete_comment", skip_all)]
    pub async fn handle(&self, payload: &Value) -> Result<u64, DomainError> {
        let request = DeleteComment::from_payload(payload)?;

        self.users.get_user_by_id(&request.user_id).await?;
        self.comments
            .verify_comment_availability(&request.comment_id)
            .await?;
        self.threads
            .verify_available_thread_by_id(&request.thread_id)
            .await?;
        self.comments.verify_comment_owner(&request).await?;
        debug!(
            comment_id = %request.comment_id,
            user_id = %request.user_id,
            "comment ownership verified"
        );

        let deleted = self.comments.delete_comment_by_id(&request).await?;
        debug!(comment_id = %request.comment_id, deleted, "comment soft-deleted");

        Ok(deleted)
    }
}
