//! Strongly-typed identifier value objects.
//!
//! Forum identifiers are opaque strings assigned by the persistence layer
//! (`thread-…`, `comment-…`) or by the external auth service (`user-…`).

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an already-validated identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier, returning the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// User identifier (resolved from the access token).
    UserId
);

string_id!(
    /// Identifier of a discussion thread.
    ThreadId
);

string_id!(
    /// Identifier of a comment within a thread.
    CommentId
);

/// Prefix applied to generated thread identifiers.
pub const THREAD_ID_PREFIX: &str = "thread";

/// Prefix applied to generated comment identifiers.
pub const COMMENT_ID_PREFIX: &str = "comment";

impl ThreadId {
    /// Builds a thread id from a generated suffix, e.g. `thread-123`.
    pub fn generated(suffix: &str) -> Self {
        Self(format!("{}-{}", THREAD_ID_PREFIX, suffix))
    }
}

impl CommentId {
    /// Builds a comment id from a generated suffix, e.g. `comment-123`.
    pub fn generated(suffix: &str) -> Self {
        Self(format!("{}-{}", COMMENT_ID_PREFIX, suffix))
    }
}
