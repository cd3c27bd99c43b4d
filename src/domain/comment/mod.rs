//! Comment module - request value objects, stored records and the redacted view.

mod records;
mod values;

pub use records::{
    CommentRecord, CommentView, CreatedComment, ThreadCommentRecord, DELETED_COMMENT_PLACEHOLDER,
};
pub use values::{DeleteComment, NewComment};
