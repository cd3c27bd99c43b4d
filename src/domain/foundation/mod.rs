//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, payload validation helpers and the
//! error taxonomy that form the vocabulary of the forum domain.

mod auth;
mod errors;
mod ids;
mod payload;
mod timestamp;
mod translator;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode};
pub use ids::{CommentId, ThreadId, UserId, COMMENT_ID_PREFIX, THREAD_ID_PREFIX};
pub use payload::{is_present, required_strings, PayloadCodes};
pub use timestamp::Timestamp;
pub use translator::{ClientError, DomainErrorTranslator, TranslatedError};
