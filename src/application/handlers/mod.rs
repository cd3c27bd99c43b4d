//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Each
//! handler validates a raw payload into a value object, then calls its
//! ports strictly in sequence; any failure short-circuits the rest.

pub mod comment;
pub mod thread;

#[cfg(test)]
pub(crate) mod test_support;

pub use comment::{AddCommentHandler, DeleteCommentHandler};
pub use thread::{AddThreadHandler, GetThreadDetailsHandler};
