//! PostgreSQL implementation of ThreadRepository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::user_repository::get_column;
use crate::domain::foundation::{DomainError, ErrorCode, ThreadId, Timestamp, UserId};
use crate::domain::thread::{CreatedThread, NewThread, ThreadRecord};
use crate::ports::{IdGenerator, ThreadRepository};

/// PostgreSQL implementation of ThreadRepository.
#[derive(Clone)]
pub struct PostgresThreadRepository {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl PostgresThreadRepository {
    /// Creates a new PostgresThreadRepository.
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[async_trait]
impl ThreadRepository for PostgresThreadRepository {
    async fn add_thread(&self, thread: &NewThread) -> Result<CreatedThread, DomainError> {
        let id = ThreadId::generated(&self.ids.generate());

        let row = sqlx::query(
            r#"
            INSERT INTO threads (id, title, body, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, user_id
            "#,
        )
        .bind(id.as_str())
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(thread.user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert thread", e))?;

        Ok(CreatedThread {
            id: ThreadId::new(get_column::<String>(&row, "id")?),
            title: get_column(&row, "title")?,
            owner: UserId::new(get_column::<String>(&row, "user_id")?),
        })
    }

    async fn get_thread_by_id(&self, id: &ThreadId) -> Result<ThreadRecord, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT t.id, t.title, t.body, t.date, u.username
            FROM threads t
            JOIN users u ON t.user_id = u.id
            WHERE t.id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch thread", e))?
        .ok_or_else(|| {
            DomainError::new(ErrorCode::GetThreadDetailsDataNotFound, "thread tidak ditemukan")
        })?;

        Ok(ThreadRecord {
            id: ThreadId::new(get_column::<String>(&row, "id")?),
            title: get_column(&row, "title")?,
            body: get_column(&row, "body")?,
            date: Timestamp::from_datetime(get_column::<DateTime<Utc>>(&row, "date")?),
            username: get_column(&row, "username")?,
        })
    }

    async fn verify_available_thread_by_id(&self, id: &ThreadId) -> Result<(), DomainError> {
        let found: Option<(String,)> = sqlx::query_as("SELECT id FROM threads WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check thread existence", e))?;

        match found {
            Some(_) => Ok(()),
            None => Err(DomainError::from_code(ErrorCode::VerifyThreadDataNotFound)),
        }
    }
}
