//! User lookup port.
//!
//! Users are registered and authenticated elsewhere; the forum only needs
//! to confirm that a resolved user id still refers to an existing account.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Minimal user view needed by the forum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub fullname: String,
}

/// Read-only access to registered users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by id.
    ///
    /// # Errors
    ///
    /// - `VerifyUserDataNotFound` if no user has this id
    /// - `DatabaseError` on persistence failure
    async fn get_user_by_id(&self, id: &UserId) -> Result<UserRecord, DomainError>;
}
