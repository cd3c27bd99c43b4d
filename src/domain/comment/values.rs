//! Request value objects for comment operations.

use serde_json::Value;

use crate::domain::foundation::{
    required_strings, CommentId, DomainError, ErrorCode, PayloadCodes, ThreadId, UserId,
};

const NEW_COMMENT_CODES: PayloadCodes = PayloadCodes {
    missing: ErrorCode::AddCommentNotContainNeededProperty,
    mistyped: ErrorCode::AddCommentNotMeetDataTypeSpecification,
};

const DELETE_COMMENT_CODES: PayloadCodes = PayloadCodes {
    missing: ErrorCode::DeleteCommentNotContainNeededProperty,
    mistyped: ErrorCode::DeleteCommentNotMeetDataTypeSpecification,
};

/// Validated request to post a comment on a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub user_id: UserId,
    pub thread_id: ThreadId,
    pub content: String,
}

impl NewComment {
    /// Validates a `{ userId, threadId, content }` payload.
    ///
    /// # Errors
    ///
    /// - `AddCommentNotContainNeededProperty` when a field is absent
    /// - `AddCommentNotMeetDataTypeSpecification` when a field is not a string
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        let [user_id, thread_id, content] =
            required_strings(payload, ["userId", "threadId", "content"], NEW_COMMENT_CODES)?;

        Ok(Self {
            user_id: UserId::new(user_id),
            thread_id: ThreadId::new(thread_id),
            content,
        })
    }
}

/// Validated request to soft-delete a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
    pub comment_id: CommentId,
    pub thread_id: ThreadId,
    pub user_id: UserId,
}

impl DeleteComment {
    /// Validates a `{ commentId, threadId, userId }` payload.
    ///
    /// # Errors
    ///
    /// - `DeleteCommentNotContainNeededProperty` when a field is absent
    /// - `DeleteCommentNotMeetDataTypeSpecification` when a field is not a string
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        let [comment_id, thread_id, user_id] = required_strings(
            payload,
            ["commentId", "threadId", "userId"],
            DELETE_COMMENT_CODES,
        )?;

        Ok(Self {
            comment_id: CommentId::new(comment_id),
            thread_id: ThreadId::new(thread_id),
            user_id: UserId::new(user_id),
        })
    }
}
