//! AddCommentHandler - Command handler for posting a comment on a thread.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::comment::{CreatedComment, NewComment};
use crate::domain::foundation::DomainError;
use crate::ports::{CommentRepository, ThreadRepository, UserRepository};

/// Handler for creating comments.
///
/// The author is checked before the thread, and both before the insert.
pub struct AddCommentHandler {
    users: Arc<dyn UserRepository>,
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl AddCommentHandler {
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

    #[tracing::instrument(name = "add_comment", skip_all)]
    pub async fn handle(&self, payload: &Value) -> Result<CreatedComment, DomainError> {
        let request = NewComment::from_payload(payload)?;

        self.users.get_user_by_id(&request.user_id).await?;
        self.threads
            .verify_available_thread_by_id(&request.thread_id)
            .await?;
        debug!(
            user_id = %request.user_id,
            thread_id = %request.thread_id,
            "comment target verified"
        );

        let created = self.comments.add_comment(&request).await?;
        debug!(comment_id = %created.id, "comment created");

        Ok(created)
    }
}
