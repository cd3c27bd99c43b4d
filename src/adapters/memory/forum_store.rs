//! In-memory forum store for testing.
//!
//! Implements the user, thread and comment repository ports over
//! `tokio::sync::RwLock`-guarded vectors, mirroring the PostgreSQL adapters:
//! generated `thread-`/`comment-` ids, soft-delete via a flag, and
//! chronological comment listing.
//!
//! This adapter is for **testing only**; nothing is persisted.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::comment::{
    CommentRecord, CreatedComment, DeleteComment, NewComment, ThreadCommentRecord,
};
use crate::domain::foundation::{
    CommentId, DomainError, ErrorCode, ThreadId, Timestamp, UserId,
};
use crate::domain::thread::{CreatedThread, NewThread, ThreadRecord};
use crate::ports::{CommentRepository, IdGenerator, ThreadRepository, UserRecord, UserRepository};

#[derive(Debug, Clone)]
struct StoredThread {
    id: ThreadId,
    title: String,
    body: String,
    owner: UserId,
    date: Timestamp,
}

#[derive(Debug, Clone)]
struct StoredComment {
    id: CommentId,
    content: String,
    owner: UserId,
    thread_id: ThreadId,
    is_delete: bool,
    date: Timestamp,
}

impl StoredComment {
    fn to_record(&self) -> CommentRecord {
        CommentRecord {
            id: self.id.clone(),
            content: self.content.clone(),
            owner: self.owner.clone(),
            thread_id: self.thread_id.clone(),
        }
    }
}

/// In-memory implementation of every forum repository port.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(
///     InMemoryForumStore::new(Arc::new(UuidIdGenerator::new()))
///         .with_user("user-123", "dicoding", "Dicoding Indonesia"),
/// );
/// ```
pub struct InMemoryForumStore {
    ids: Arc<dyn IdGenerator>,
    users: RwLock<Vec<UserRecord>>,
    threads: RwLock<Vec<StoredThread>>,
    comments: RwLock<Vec<StoredComment>>,
}

impl InMemoryForumStore {
    /// Creates an empty store.
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            users: RwLock::new(Vec::new()),
            threads: RwLock::new(Vec::new()),
            comments: RwLock::new(Vec::new()),
        }
    }

    /// Seeds a registered user.
    pub fn with_user(
        mut self,
        id: impl Into<String>,
        username: impl Into<String>,
        fullname: impl Into<String>,
    ) -> Self {
        self.users.get_mut().push(UserRecord {
            id: UserId::new(id),
            username: username.into(),
            fullname: fullname.into(),
        });
        self
    }

    // === Test Helpers ===

    /// Returns the soft-delete flag of a comment, or `None` if it never existed.
    pub async fn is_comment_deleted(&self, id: &CommentId) -> Option<bool> {
        self.comments
            .read()
            .await
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.is_delete)
    }

    /// Number of stored comments, deleted ones included.
    pub async fn comment_count(&self) -> usize {
        self.comments.read().await.len()
    }

    async fn username_of(&self, id: &UserId) -> Result<String, DomainError> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| &u.id == id)
            .map(|u| u.username.clone())
            .ok_or_else(|| {
                DomainError::new(ErrorCode::DatabaseError, "dangling user reference")
                    .with_detail("user_id", id.as_str())
            })
    }

    async fn ensure_user(&self, id: &UserId) -> Result<(), DomainError> {
        self.username_of(id).await.map(|_| ())
    }
}

#[async_trait]
impl UserRepository for InMemoryForumStore {
    async fn get_user_by_id(&self, id: &UserId) -> Result<UserRecord, DomainError> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or_else(|| DomainError::from_code(ErrorCode::VerifyUserDataNotFound))
    }
}

#[async_trait]
impl ThreadRepository for InMemoryForumStore {
    async fn add_thread(&self, thread: &NewThread) -> Result<CreatedThread, DomainError> {
        self.ensure_user(&thread.user_id).await?;

        let id = ThreadId::generated(&self.ids.generate());
        let mut threads = self.threads.write().await;
        if threads.iter().any(|t| t.id == id) {
            return Err(DomainError::new(ErrorCode::DatabaseError, "duplicate thread id")
                .with_detail("thread_id", id.as_str()));
        }

        threads.push(StoredThread {
            id: id.clone(),
            title: thread.title.clone(),
            body: thread.body.clone(),
            owner: thread.user_id.clone(),
            date: Timestamp::now(),
        });

        Ok(CreatedThread {
            id,
            title: thread.title.clone(),
            owner: thread.user_id.clone(),
        })
    }

    async fn get_thread_by_id(&self, id: &ThreadId) -> Result<ThreadRecord, DomainError> {
        let stored = self
            .threads
            .read()
            .await
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| {
                DomainError::new(ErrorCode::GetThreadDetailsDataNotFound, "thread tidak ditemukan")
            })?;

        Ok(ThreadRecord {
            username: self.username_of(&stored.owner).await?,
            id: stored.id,
            title: stored.title,
            body: stored.body,
            date: stored.date,
        })
    }

    async fn verify_available_thread_by_id(&self, id: &ThreadId) -> Result<(), DomainError> {
        if self.threads.read().await.iter().any(|t| &t.id == id) {
            Ok(())
        } else {
            Err(DomainError::from_code(ErrorCode::VerifyThreadDataNotFound))
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryForumStore {
    async fn add_comment(&self, comment: &NewComment) -> Result<CreatedComment, DomainError> {
        self.ensure_user(&comment.user_id).await?;
        if !self.threads.read().await.iter().any(|t| t.id == comment.thread_id) {
            return Err(DomainError::new(ErrorCode::DatabaseError, "dangling thread reference")
                .with_detail("thread_id", comment.thread_id.as_str()));
        }

        let id = CommentId::generated(&self.ids.generate());
        let mut comments = self.comments.write().await;
        if comments.iter().any(|c| c.id == id) {
            return Err(DomainError::new(ErrorCode::DatabaseError, "duplicate comment id")
                .with_detail("comment_id", id.as_str()));
        }

        comments.push(StoredComment {
            id: id.clone(),
            content: comment.content.clone(),
            owner: comment.user_id.clone(),
            thread_id: comment.thread_id.clone(),
            is_delete: false,
            date: Timestamp::now(),
        });

        Ok(CreatedComment {
            id,
            content: comment.content.clone(),
            owner: comment.user_id.clone(),
        })
    }

    async fn verify_comment_availability(
        &self,
        id: &CommentId,
    ) -> Result<CommentRecord, DomainError> {
        self.comments
            .read()
            .await
            .iter()
            .find(|c| &c.id == id && !c.is_delete)
            .map(StoredComment::to_record)
            .ok_or_else(|| DomainError::from_code(ErrorCode::VerifyCommentDataNotFound))
    }

    async fn verify_comment_owner(
        &self,
        request: &DeleteComment,
    ) -> Result<CommentRecord, DomainError> {
        self.comments
            .read()
            .await
            .iter()
            .find(|c| c.id == request.comment_id && c.owner == request.user_id)
            .map(StoredComment::to_record)
            .ok_or_else(|| DomainError::from_code(ErrorCode::VerifyCommentInvalidOwner))
    }

    async fn delete_comment_by_id(&self, request: &DeleteComment) -> Result<u64, DomainError> {
        let mut comments = self.comments.write().await;
        match comments
            .iter_mut()
            .find(|c| c.id == request.comment_id && !c.is_delete)
        {
            Some(comment) => {
                comment.is_delete = true;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Vec<ThreadCommentRecord>, DomainError> {
        let mut stored: Vec<StoredComment> = self
            .comments
            .read()
            .await
            .iter()
            .filter(|c| &c.thread_id == thread_id)
            .cloned()
            .collect();
        // Stable sort keeps insertion order for equal timestamps.
        stored.sort_by(|a, b| a.date.cmp(&b.date));

        let mut records = Vec::with_capacity(stored.len());
        for comment in stored {
            records.push(ThreadCommentRecord {
                username: self.username_of(&comment.owner).await?,
                id: comment.id,
                date: comment.date,
                content: comment.content,
                is_delete: comment.is_delete,
            });
        }
        Ok(records)
    }
}
