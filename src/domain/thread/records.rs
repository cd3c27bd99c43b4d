//! Thread records produced by persistence and assembled by the read path.

use serde::Serialize;

use crate::domain::comment::CommentView;
use crate::domain::foundation::{ThreadId, Timestamp, UserId};

/// Thread as returned right after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedThread {
    pub id: ThreadId,
    pub title: String,
    pub owner: UserId,
}

/// Thread row joined with its author's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRecord {
    pub id: ThreadId,
    pub title: String,
    pub body: String,
    pub date: Timestamp,
    pub username: String,
}

/// Read model: a thread with its comments in chronological order.
///
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadDetail {
    pub id: ThreadId,
    pub title: String,
    pub body: String,
    pub date: Timestamp,
    pub username: String,
    pub comments: Vec<CommentView>,
}

impl ThreadDetail {
    /// Attaches an already-projected comment sequence to a thread record.
    pub fn from_record(thread: ThreadRecord, comments: Vec<CommentView>) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
            username: thread.username,
            comments,
        }
    }
}
