//! Access token verification settings.

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

const MIN_PRODUCTION_KEY_LEN: usize = 32;

/// HS256 shared secret used to verify access tokens.
///
/// Token lifetime is carried by each token's `exp` claim, set by the issuer.
#[derive(Clone, Default, Deserialize)]
pub struct AuthConfig {
    pub access_token_key: String,
}

impl AuthConfig {
    /// Production refuses keys shorter than 32 bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.access_token_key.is_empty() {
            return Err(ValidationError::MissingRequired("FORUM_API__AUTH__ACCESS_TOKEN_KEY"));
        }
        if *environment == Environment::Production
            && self.access_token_key.len() < MIN_PRODUCTION_KEY_LEN
        {
            return Err(ValidationError::WeakAccessTokenKey);
        }
        Ok(())
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_token_key", &"[REDACTED]")
            .finish()
    }
}
