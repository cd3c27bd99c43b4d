//! GetThreadDetailsHandler - Query handler for a thread with its comments.
//!
//! Composes two independent reads: the thread (joined with its author) and
//! the thread's comments in chronological order. Soft-deleted comments stay
//! in the list with their content redacted.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::comment::CommentView;
use crate::domain::foundation::DomainError;
use crate::domain::thread::{GetThreadDetails, ThreadDetail};
use crate::ports::{CommentRepository, ThreadRepository};

/// Handler for reading thread details.
pub struct GetThreadDetailsHandler {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl GetThreadDetailsHandler {
    pub fn new(threads: Arc<dyn ThreadRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { threads, comments }
    }

    #[tracing::instrument(name = "get_thread_details", skip_all)]
    pub async fn handle(&self, payload: &Value) -> Result<ThreadDetail, DomainError> {
        let query = GetThreadDetails::from_payload(payload)?;

        let thread = self.threads.get_thread_by_id(&query.thread_id).await?;
        let comments = self
            .comments
            .get_comments_by_thread_id(&query.thread_id)
            .await?;
        debug!(
            thread_id = %query.thread_id,
            comment_count = comments.len(),
            "thread details loaded"
        );

        let comments = comments.into_iter().map(CommentView::from).collect();
        Ok(ThreadDetail::from_record(thread, comments))
    }
}
