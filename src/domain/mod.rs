//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, payload rules, error taxonomy)
//! - `thread` - Thread request value objects and read models
//! - `comment` - Comment request value objects, records and the redacted view

pub mod comment;
pub mod foundation;
pub mod thread;
