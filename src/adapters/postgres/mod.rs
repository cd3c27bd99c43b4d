//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - User lookup
//! - `PostgresThreadRepository` - Thread insert and lookup
//! - `PostgresCommentRepository` - Comment insert, verification, soft-delete and listing
//!
//! The schema lives in `migrations/` and is applied at startup when
//! `database.run_migrations` is set.

mod comment_repository;
mod thread_repository;
mod user_repository;

pub use comment_repository::PostgresCommentRepository;
pub use thread_repository::PostgresThreadRepository;
pub use user_repository::PostgresUserRepository;
