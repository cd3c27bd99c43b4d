//! Comment repository port.
//!
//! Comments are never removed physically. Deletion flips a soft-delete flag;
//! the read path redacts flagged comments instead of hiding them.

use async_trait::async_trait;

use crate::domain::comment::{
    CommentRecord, CreatedComment, DeleteComment, NewComment, ThreadCommentRecord,
};
use crate::domain::foundation::{CommentId, DomainError, ThreadId};

/// Repository port for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment on `comment.thread_id`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn add_comment(&self, comment: &NewComment) -> Result<CreatedComment, DomainError>;

    /// Fetch a comment that exists and is not soft-deleted.
    ///
    /// # Errors
    ///
    /// - `VerifyCommentDataNotFound` if absent or already deleted
    /// - `DatabaseError` on persistence failure
    async fn verify_comment_availability(
        &self,
        id: &CommentId,
    ) -> Result<CommentRecord, DomainError>;

    /// Fetch the comment only if `request.user_id` owns it.
    ///
    /// # Errors
    ///
    /// - `VerifyCommentInvalidOwner` if the comment belongs to another user
    /// - `DatabaseError` on persistence failure
    async fn verify_comment_owner(
        &self,
        request: &DeleteComment,
    ) -> Result<CommentRecord, DomainError>;

    /// Set the soft-delete flag on a live comment.
    ///
    /// Returns the number of rows changed: `1` on the first call, `0` once
    /// the comment is already deleted.
    async fn delete_comment_by_id(&self, request: &DeleteComment) -> Result<u64, DomainError>;

    /// All comments of a thread, oldest first, including deleted ones.
    async fn get_comments_by_thread_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Vec<ThreadCommentRecord>, DomainError>;
}
