//! PostgreSQL implementation of CommentRepository.
//!
//! Comments are soft-deleted through the `is_delete` column and never
//! removed from the table.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::user_repository::get_column;
use crate::domain::comment::{
    CommentRecord, CreatedComment, DeleteComment, NewComment, ThreadCommentRecord,
};
use crate::domain::foundation::{CommentId, DomainError, ErrorCode, ThreadId, Timestamp, UserId};
use crate::ports::{CommentRepository, IdGenerator};

/// PostgreSQL implementation of CommentRepository.
#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl PostgresCommentRepository {
    /// Creates a new PostgresCommentRepository.
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn add_comment(&self, comment: &NewComment) -> Result<CreatedComment, DomainError> {
        let id = CommentId::generated(&self.ids.generate());

        let row = sqlx::query(
            r#"
            INSERT INTO comments (id, content, user_id, thread_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, user_id
            "#,
        )
        .bind(id.as_str())
        .bind(&comment.content)
        .bind(comment.user_id.as_str())
        .bind(comment.thread_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert comment", e))?;

        Ok(CreatedComment {
            id: CommentId::new(get_column::<String>(&row, "id")?),
            content: get_column(&row, "content")?,
            owner: UserId::new(get_column::<String>(&row, "user_id")?),
        })
    }

    async fn verify_comment_availability(
        &self,
        id: &CommentId,
    ) -> Result<CommentRecord, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, content, user_id, thread_id
            FROM comments
            WHERE id = $1 AND is_delete IS NOT TRUE
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch comment", e))?
        .ok_or_else(|| DomainError::from_code(ErrorCode::VerifyCommentDataNotFound))?;

        row_to_comment(&row)
    }

    async fn verify_comment_owner(
        &self,
        request: &DeleteComment,
    ) -> Result<CommentRecord, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, content, user_id, thread_id
            FROM comments
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(request.comment_id.as_str())
        .bind(request.user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to verify comment owner", e))?
        .ok_or_else(|| DomainError::from_code(ErrorCode::VerifyCommentInvalidOwner))?;

        row_to_comment(&row)
    }

    async fn delete_comment_by_id(&self, request: &DeleteComment) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "UPDATE comments SET is_delete = TRUE WHERE id = $1 AND is_delete = FALSE",
        )
        .bind(request.comment_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to delete comment", e))?;

        Ok(result.rows_affected())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Vec<ThreadCommentRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, u.username, c.date, c.content, c.is_delete
            FROM comments c
            JOIN users u ON c.user_id = u.id
            WHERE c.thread_id = $1
            ORDER BY c.date ASC
            "#,
        )
        .bind(thread_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch thread comments", e))?;

        rows.iter().map(row_to_thread_comment).collect()
    }
}

fn row_to_comment(row: &PgRow) -> Result<CommentRecord, DomainError> {
    Ok(CommentRecord {
        id: CommentId::new(get_column::<String>(row, "id")?),
        content: get_column(row, "content")?,
        owner: UserId::new(get_column::<String>(row, "user_id")?),
        thread_id: ThreadId::new(get_column::<String>(row, "thread_id")?),
    })
}

fn row_to_thread_comment(row: &PgRow) -> Result<ThreadCommentRecord, DomainError> {
    Ok(ThreadCommentRecord {
        id: CommentId::new(get_column::<String>(row, "id")?),
        username: get_column(row, "username")?,
        date: Timestamp::from_datetime(get_column::<DateTime<Utc>>(row, "date")?),
        content: get_column(row, "content")?,
        is_delete: get_column(row, "is_delete")?,
    })
}
