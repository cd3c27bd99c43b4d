//! Shared-secret JWT adapter for access token validation.
//!
//! Access tokens are HS256-signed with `auth.access_token_key` by the account
//! service. This adapter:
//!
//! 1. Verifies the signature against the shared key
//! 2. Validates the expiry claim
//! 3. Maps the `id` claim to the domain `UserId`
//!
//! # Example
//!
//! ```ignore
//! let validator = JwtSessionValidator::new(SecretString::new(key));
//! let user = validator.validate("eyJ...").await?;
//! ```

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Claims carried by forum access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// User id, e.g. `user-123`.
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Expiry as seconds since the Unix epoch.
    pub exp: u64,
}

/// Validates HS256 access tokens signed with a shared secret.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(access_token_key: SecretString) -> Self {
        let decoding_key = DecodingKey::from_secret(access_token_key.expose_secret().as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key,
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })?;

        let claims = data.claims;
        if claims.id.trim().is_empty() {
            tracing::warn!("Token carries an empty id claim");
            return Err(AuthError::InvalidToken);
        }

        Ok(AuthenticatedUser::new(UserId::new(claims.id), claims.username))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("algorithm", &Algorithm::HS256)
            .finish_non_exhaustive()
    }
}
