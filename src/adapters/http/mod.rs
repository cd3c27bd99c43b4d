//! HTTP adapters - REST API implementations.
//!
//! ```text
//! POST   /threads                                 (auth)  create thread
//! GET    /threads/:threadId                               thread details
//! POST   /threads/:threadId/comments              (auth)  add comment
//! DELETE /threads/:threadId/comments/:commentId   (auth)  soft-delete comment
//! GET    /health
//! ```

pub mod error;
pub mod health;
pub mod middleware;
pub mod threads;

use axum::{middleware::from_fn_with_state, routing::get, Router};

pub use error::{handle_forum_error, ErrorResponse, SERVER_FAILURE_MESSAGE};
pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use threads::{thread_routes, ForumHandlers};

/// Assembles the full forum API.
///
/// The auth middleware runs on every route; only handlers that take
/// `RequireAuth` reject anonymous requests.
pub fn forum_router(handlers: ForumHandlers, validator: AuthState) -> Router {
    Router::new()
        .nest("/threads", thread_routes(handlers))
        .route("/health", get(health::health))
        .layer(from_fn_with_state(validator, auth_middleware))
}
