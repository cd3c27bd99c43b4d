//! Caller identity resolved from an access token.
//!
//! Tokens are only ever seen at the HTTP boundary. Handlers receive the
//! resolved [`UserId`] merged into their payload as `userId`.

use super::UserId;
use thiserror::Error;

/// The caller behind a validated access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,

    /// `username` claim; tokens issued by older auth services omit it.
    pub username: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, username: Option<String>) -> Self {
        Self { id, username }
    }
}

/// Why a bearer token was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("access token is malformed or its signature does not match")]
    InvalidToken,

    #[error("access token has expired")]
    TokenExpired,

    /// The validator itself is broken, not the token.
    #[error("token validation unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// True when a fresh token would fix the request.
    pub fn requires_reauthentication(&self) -> bool {
        !matches!(self, AuthError::ServiceUnavailable(_))
    }
}
