//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ThreadRepository` - Create threads, look them up, check existence
//! - `CommentRepository` - Create, verify, soft-delete and list comments
//! - `UserRepository` - Read-only user lookup
//!
//! ## Infrastructure Ports
//!
//! - `IdGenerator` - Unique suffixes for new thread/comment ids
//! - `SessionValidator` - Access token validation at the HTTP boundary

mod comment_repository;
mod id_generator;
mod session_validator;
mod thread_repository;
mod user_repository;

pub use comment_repository::CommentRepository;
pub use id_generator::{FixedIdGenerator, IdGenerator};
pub use session_validator::SessionValidator;
pub use thread_repository::ThreadRepository;
pub use user_repository::{UserRecord, UserRepository};
