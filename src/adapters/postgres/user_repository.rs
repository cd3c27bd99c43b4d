//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{UserRecord, UserRepository};

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get_user_by_id(&self, id: &UserId) -> Result<UserRecord, DomainError> {
        let row = sqlx::query("SELECT id, username, fullname FROM users WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch user", e))?
            .ok_or_else(|| DomainError::from_code(ErrorCode::VerifyUserDataNotFound))?;

        Ok(UserRecord {
            id: UserId::new(get_column::<String>(&row, "id")?),
            username: get_column(&row, "username")?,
            fullname: get_column(&row, "fullname")?,
        })
    }
}

/// Reads a column, mapping decode failures to `DatabaseError`.
pub(super) fn get_column<'r, T>(
    row: &'r sqlx::postgres::PgRow,
    column: &str,
) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| DomainError::database(&format!("Failed to read column {}", column), e))
}
