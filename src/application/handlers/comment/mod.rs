//! Comment command handlers.

mod add_comment;
mod delete_comment;

pub use add_comment::AddCommentHandler;
pub use delete_comment::DeleteCommentHandler;
