//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Repository ports backed by PostgreSQL
//! - `memory` - Repository ports backed by process memory (tests)
//! - `auth` - Session validators (JWT, mock)
//! - `id` - Identifier generation
//! - `http` - axum router, middleware and DTOs

pub mod auth;
pub mod http;
pub mod id;
pub mod memory;
pub mod postgres;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use http::{forum_router, ForumHandlers};
pub use id::UuidIdGenerator;
pub use memory::InMemoryForumStore;
pub use postgres::{PostgresCommentRepository, PostgresThreadRepository, PostgresUserRepository};
