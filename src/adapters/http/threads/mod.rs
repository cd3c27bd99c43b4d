//! HTTP adapter for thread and comment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    payload_from_body, AddedCommentData, AddedThreadData, CommentResponse, StatusResponse,
    SuccessResponse, ThreadData, ThreadResponse,
};
pub use handlers::ForumHandlers;
pub use routes::thread_routes;
