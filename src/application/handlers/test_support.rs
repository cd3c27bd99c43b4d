//! Recording port doubles shared by handler tests.
//!
//! `RecordingForum` implements every repository port, answers from a small
//! configurable fixture, and logs each call so tests can assert ordering
//! and arguments.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::comment::{
    CommentRecord, CreatedComment, DeleteComment, NewComment, ThreadCommentRecord,
};
use crate::domain::foundation::{
    CommentId, DomainError, ErrorCode, ThreadId, Timestamp, UserId,
};
use crate::domain::thread::{CreatedThread, NewThread, ThreadRecord};
use crate::ports::{CommentRepository, ThreadRepository, UserRecord, UserRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    GetUser(UserId),
    AddThread(NewThread),
    GetThread(ThreadId),
    VerifyThread(ThreadId),
    AddComment(NewComment),
    VerifyCommentAvailability(CommentId),
    VerifyCommentOwner(DeleteComment),
    DeleteComment(DeleteComment),
    GetComments(ThreadId),
}

pub(crate) struct RecordingForum {
    calls: Mutex<Vec<Call>>,
    pub user_exists: bool,
    pub thread: Option<ThreadRecord>,
    /// Owner of `comment-123`; `None` means the comment is unavailable.
    pub comment_owner: Option<UserId>,
    pub comments: Vec<ThreadCommentRecord>,
    pub deleted_rows: u64,
    /// Fails every call after recording it.
    pub fail_database: bool,
    /// Fails only `get_comments_by_thread_id`.
    pub fail_comment_listing: bool,
}

impl RecordingForum {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            user_exists: true,
            thread: Some(thread_fixture()),
            comment_owner: Some(UserId::new("user-123")),
            comments: Vec::new(),
            deleted_rows: 1,
            fail_database: false,
            fail_comment_listing: false,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(call);
        if self.fail_database {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated database failure",
            ));
        }
        Ok(())
    }
}

pub(crate) fn thread_fixture() -> ThreadRecord {
    ThreadRecord {
        id: ThreadId::new("thread-123"),
        title: "sebuah thread".to_string(),
        body: "sebuah body thread".to_string(),
        date: Timestamp::now(),
        username: "dicoding".to_string(),
    }
}

pub(crate) fn comment_fixture(id: &str, content: &str, is_delete: bool) -> ThreadCommentRecord {
    ThreadCommentRecord {
        id: CommentId::new(id),
        username: "dicoding".to_string(),
        date: Timestamp::now(),
        content: content.to_string(),
        is_delete,
    }
}

#[async_trait]
impl UserRepository for RecordingForum {
    async fn get_user_by_id(&self, id: &UserId) -> Result<UserRecord, DomainError> {
        self.record(Call::GetUser(id.clone()))?;
        if !self.user_exists {
            return Err(DomainError::from_code(ErrorCode::VerifyUserDataNotFound));
        }
        Ok(UserRecord {
            id: id.clone(),
            username: "dicoding".to_string(),
            fullname: "Dicoding Indonesia".to_string(),
        })
    }
}

#[async_trait]
impl ThreadRepository for RecordingForum {
    async fn add_thread(&self, thread: &NewThread) -> Result<CreatedThread, DomainError> {
        self.record(Call::AddThread(thread.clone()))?;
        Ok(CreatedThread {
            id: ThreadId::new("thread-123"),
            title: thread.title.clone(),
            owner: thread.user_id.clone(),
        })
    }

    async fn get_thread_by_id(&self, id: &ThreadId) -> Result<ThreadRecord, DomainError> {
        self.record(Call::GetThread(id.clone()))?;
        self.thread
            .clone()
            .ok_or_else(|| DomainError::from_code(ErrorCode::GetThreadDetailsDataNotFound))
    }

    async fn verify_available_thread_by_id(&self, id: &ThreadId) -> Result<(), DomainError> {
        self.record(Call::VerifyThread(id.clone()))?;
        match self.thread {
            Some(_) => Ok(()),
            None => Err(DomainError::from_code(ErrorCode::VerifyThreadDataNotFound)),
        }
    }
}

#[async_trait]
impl CommentRepository for RecordingForum {
    async fn add_comment(&self, comment: &NewComment) -> Result<CreatedComment, DomainError> {
        self.record(Call::AddComment(comment.clone()))?;
        Ok(CreatedComment {
            id: CommentId::new("comment-123"),
            content: comment.content.clone(),
            owner: comment.user_id.clone(),
        })
    }

    async fn verify_comment_availability(
        &self,
        id: &CommentId,
    ) -> Result<CommentRecord, DomainError> {
        self.record(Call::VerifyCommentAvailability(id.clone()))?;
        let owner = self
            .comment_owner
            .clone()
            .ok_or_else(|| DomainError::from_code(ErrorCode::VerifyCommentDataNotFound))?;
        Ok(CommentRecord {
            id: id.clone(),
            content: "sebuah comment".to_string(),
            owner,
            thread_id: ThreadId::new("thread-123"),
        })
    }

    async fn verify_comment_owner(
        &self,
        request: &DeleteComment,
    ) -> Result<CommentRecord, DomainError> {
        self.record(Call::VerifyCommentOwner(request.clone()))?;
        match &self.comment_owner {
            Some(owner) if *owner == request.user_id => Ok(CommentRecord {
                id: request.comment_id.clone(),
                content: "sebuah comment".to_string(),
                owner: owner.clone(),
                thread_id: request.thread_id.clone(),
            }),
            _ => Err(DomainError::from_code(ErrorCode::VerifyCommentInvalidOwner)),
        }
    }

    async fn delete_comment_by_id(&self, request: &DeleteComment) -> Result<u64, DomainError> {
        self.record(Call::DeleteComment(request.clone()))?;
        Ok(self.deleted_rows)
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Vec<ThreadCommentRecord>, DomainError> {
        self.record(Call::GetComments(thread_id.clone()))?;
        if self.fail_comment_listing {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated comment listing failure",
            ));
        }
        Ok(self.comments.clone())
    }
}
