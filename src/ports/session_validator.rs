//! Access token validation port.
//!
//! The HTTP middleware is the only caller. Use cases never see tokens, only
//! the [`UserId`](crate::domain::foundation::UserId) it resolves to.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Resolves a bearer token to the user it was issued for.
///
/// Implementations check the signature and the `exp` claim. A bad signature
/// or malformed token is `InvalidToken`, a past `exp` is `TokenExpired`, and
/// `ServiceUnavailable` is reserved for failures of the validator itself.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// `token` is the raw value after the `Bearer ` prefix.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
