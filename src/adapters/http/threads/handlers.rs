//! HTTP handlers for thread and comment endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::adapters::http::error::handle_forum_error;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    AddCommentHandler, AddThreadHandler, DeleteCommentHandler, GetThreadDetailsHandler,
};
use crate::ports::{CommentRepository, ThreadRepository, UserRepository};

use super::dto::{
    payload_from_body, AddedCommentData, AddedThreadData, StatusResponse, SuccessResponse,
    ThreadData,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ForumHandlers {
    add_thread: Arc<AddThreadHandler>,
    get_thread_details: Arc<GetThreadDetailsHandler>,
    add_comment: Arc<AddCommentHandler>,
    delete_comment: Arc<DeleteCommentHandler>,
}

impl ForumHandlers {
    pub fn new(
        add_thread: Arc<AddThreadHandler>,
        get_thread_details: Arc<GetThreadDetailsHandler>,
        add_comment: Arc<AddCommentHandler>,
        delete_comment: Arc<DeleteCommentHandler>,
    ) -> Self {
        Self {
            add_thread,
            get_thread_details,
            add_comment,
            delete_comment,
        }
    }

    /// Wires every handler against one set of repository ports.
    pub fn from_ports(
        users: Arc<dyn UserRepository>,
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self::new(
            Arc::new(AddThreadHandler::new(users.clone(), threads.clone())),
            Arc::new(GetThreadDetailsHandler::new(threads.clone(), comments.clone())),
            Arc::new(AddCommentHandler::new(
                users.clone(),
                threads.clone(),
                comments.clone(),
            )),
            Arc::new(DeleteCommentHandler::new(users, threads, comments)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /threads - Open a new thread
pub async fn post_thread(
    State(handlers): State<ForumHandlers>,
    RequireAuth(user): RequireAuth,
    body: Bytes,
) -> Response {
    let payload = payload_from_body(&body, &[("userId", user.id.as_str())]);

    match handlers.add_thread.handle(&payload).await {
        Ok(added_thread) => (
            StatusCode::CREATED,
            Json(SuccessResponse::new(AddedThreadData { added_thread })),
        )
            .into_response(),
        Err(e) => handle_forum_error(e),
    }
}

/// GET /threads/:threadId - Thread with its comments
pub async fn get_thread(
    State(handlers): State<ForumHandlers>,
    Path(thread_id): Path<String>,
) -> Response {
    let payload = json!({ "threadId": thread_id });

    match handlers.get_thread_details.handle(&payload).await {
        Ok(detail) => (
            StatusCode::OK,
            Json(SuccessResponse::new(ThreadData {
                thread: detail.into(),
            })),
        )
            .into_response(),
        Err(e) => handle_forum_error(e),
    }
}

/// POST /threads/:threadId/comments - Comment on a thread
pub async fn post_comment(
    State(handlers): State<ForumHandlers>,
    RequireAuth(user): RequireAuth,
    Path(thread_id): Path<String>,
    body: Bytes,
) -> Response {
    let payload = payload_from_body(
        &body,
        &[("userId", user.id.as_str()), ("threadId", thread_id.as_str())],
    );

    match handlers.add_comment.handle(&payload).await {
        Ok(added_comment) => (
            StatusCode::CREATED,
            Json(SuccessResponse::new(AddedCommentData { added_comment })),
        )
            .into_response(),
        Err(e) => handle_forum_error(e),
    }
}

/// DELETE /threads/:threadId/comments/:commentId - Soft-delete own comment
pub async fn delete_comment(
    State(handlers): State<ForumHandlers>,
    RequireAuth(user): RequireAuth,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Response {
    let payload = json!({
        "threadId": thread_id,
        "commentId": comment_id,
        "userId": user.id.as_str(),
    });

    match handlers.delete_comment.handle(&payload).await {
        Ok(deleted) => {
            tracing::debug!(deleted, "delete comment completed");
            (StatusCode::OK, Json(StatusResponse::success())).into_response()
        }
        Err(e) => handle_forum_error(e),
    }
}
