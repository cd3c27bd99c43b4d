//! Comment records produced by persistence and the redacted read view.

use serde::Serialize;

use crate::domain::foundation::{CommentId, ThreadId, Timestamp, UserId};

/// Content shown in place of a soft-deleted comment.
pub const DELETED_COMMENT_PLACEHOLDER: &str = "**komentar telah dihapus**";

/// Comment as returned right after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedComment {
    pub id: CommentId,
    pub content: String,
    pub owner: UserId,
}

/// Stored comment row, as returned by the availability and owner checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: CommentId,
    pub content: String,
    pub owner: UserId,
    pub thread_id: ThreadId,
}

/// Comment row joined with its author's username, including the delete flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadCommentRecord {
    pub id: CommentId,
    pub username: String,
    pub date: Timestamp,
    pub content: String,
    pub is_delete: bool,
}

/// Public projection of a comment inside a thread detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub id: CommentId,
    pub username: String,
    pub date: Timestamp,
    pub content: String,
}

impl From<ThreadCommentRecord> for CommentView {
    /// Drops the delete flag, redacting content when it is set.
    fn from(record: ThreadCommentRecord) -> Self {
        let content = if record.is_delete {
            DELETED_COMMENT_PLACEHOLDER.to_string()
        } else {
            record.content
        };

        Self {
            id: record.id,
            username: record.username,
            date: record.date,
            content,
        }
    }
}
