//! Token table for tests: no signing, no clock.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Accepts exactly the tokens it was seeded with.
///
/// ```ignore
/// let validator = MockSessionValidator::new()
///     .with_token("token-dicoding", "user-123")
///     .with_token("token-johndoe", "user-456");
/// ```
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: HashMap<String, AuthenticatedUser>,
    outage: Option<AuthError>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `token` as `user_id` with no username claim.
    pub fn with_token(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.with_user(token, AuthenticatedUser::new(UserId::new(user_id), None))
    }

    /// Accepts `token` as `user`.
    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    /// Fails every validation with `error`, seeded tokens included.
    pub fn failing_with(mut self, error: AuthError) -> Self {
        self.outage = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = &self.outage {
            return Err(error.clone());
        }

        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
