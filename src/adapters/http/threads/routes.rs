//! HTTP routes for thread and comment endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{delete_comment, get_thread, post_comment, post_thread, ForumHandlers};

/// Creates the thread router, to be nested under `/threads`.
pub fn thread_routes(handlers: ForumHandlers) -> Router {
    Router::new()
        .route("/", post(post_thread))
        .route("/:thread_id", get(get_thread))
        .route("/:thread_id/comments", post(post_comment))
        .route("/:thread_id/comments/:comment_id", delete(delete_comment))
        .with_state(handlers)
}
