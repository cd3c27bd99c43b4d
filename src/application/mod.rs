//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (add thread, add comment, delete comment) write; the
//! thread details handler only reads.

pub mod handlers;

pub use handlers::{
    AddCommentHandler, AddThreadHandler, DeleteCommentHandler, GetThreadDetailsHandler,
};
