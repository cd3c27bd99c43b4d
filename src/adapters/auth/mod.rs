//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwt` - Production HS256 shared-secret validation
//! - `mock` - Test implementation that doesn't require signed tokens

mod jwt;
mod mock;

pub use jwt::{AccessTokenClaims, JwtSessionValidator};
pub use mock::MockSessionValidator;
