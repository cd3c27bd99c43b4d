//! Integration tests for the forum HTTP API.
//!
//! Drives the full axum router against the in-memory store and the mock
//! session validator, checking status codes and response bodies end to end.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use forum_api::adapters::{
    forum_router, ForumHandlers, InMemoryForumStore, MockSessionValidator, UuidIdGenerator,
};
use forum_api::domain::foundation::CommentId;

// =============================================================================
// Test Infrastructure
// =============================================================================

const OWNER_TOKEN: &str = "token-dicoding";
const OTHER_TOKEN: &str = "token-johndoe";
const GHOST_TOKEN: &str = "token-ghost";

struct TestApp {
    router: Router,
    store: Arc<InMemoryForumStore>,
}

impl TestApp {
    fn new() -> Self {
        let store = Arc::new(
            InMemoryForumStore::new(Arc::new(UuidIdGenerator::new()))
                .with_user("user-123", "dicoding", "Dicoding Indonesia")
                .with_user("user-456", "johndoe", "John Doe"),
        );
        let validator = Arc::new(
            MockSessionValidator::new()
                .with_token(OWNER_TOKEN, "user-123")
                .with_token(OTHER_TOKEN, "user-456")
                .with_token(GHOST_TOKEN, "user-999"),
        );
        let handlers = ForumHandlers::from_ports(store.clone(), store.clone(), store.clone());

        Self {
            router: forum_router(handlers, validator),
            store,
        }
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Body>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = builder.body(body.unwrap_or_else(Body::empty)).unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(Body::from(body.to_string())))
            .await
    }

    async fn create_thread(&self) -> String {
        let (status, body) = self
            .post_json(
                "/threads",
                Some(OWNER_TOKEN),
                json!({ "title": "sebuah thread", "body": "sebuah body thread" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["addedThread"]["id"].as_str().unwrap().to_string()
    }

    async fn create_comment(&self, thread_id: &str, token: &str, content: &str) -> String {
        let (status, body) = self
            .post_json(
                &format!("/threads/{}/comments", thread_id),
                Some(token),
                json!({ "content": content }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["addedComment"]["id"].as_str().unwrap().to_string()
    }
}

// =============================================================================
// POST /threads
// =============================================================================

#[tokio::test]
async fn post_thread_returns_201_with_added_thread() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/threads",
            Some(OWNER_TOKEN),
            json!({ "title": "sebuah thread", "body": "sebuah body thread" }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    let added = &body["data"]["addedThread"];
    assert!(added["id"].as_str().unwrap().starts_with("thread-"));
    assert_eq!(added["title"], "sebuah thread");
    assert_eq!(added["owner"], "user-123");
}

#[tokio::test]
async fn post_thread_without_token_returns_401() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/threads", None, json!({ "title": "a", "body": "b" }))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn post_thread_with_invalid_token_returns_401() {
    let app = TestApp::new();

    let (status, _) = app
        .post_json("/threads", Some("forged"), json!({ "title": "a", "body": "b" }))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn post_thread_missing_property_returns_400() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/threads", Some(OWNER_TOKEN), json!({ "title": "sebuah thread" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(
        body["message"],
        "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada"
    );
}

#[tokio::test]
async fn post_thread_wrong_type_returns_400() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/threads",
            Some(OWNER_TOKEN),
            json!({ "title": 123, "body": ["sebuah body"] }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "tidak dapat membuat thread baru karena tipe data tidak sesuai"
    );
}

#[tokio::test]
async fn post_thread_with_non_json_body_reports_missing_property() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            Method::POST,
            "/threads",
            Some(OWNER_TOKEN),
            Some(Body::from("definitely not json")),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada"
    );
}

#[tokio::test]
async fn post_thread_for_unknown_user_returns_404() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/threads",
            Some(GHOST_TOKEN),
            json!({ "title": "a", "body": "b" }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "tidak dapat menemukan data user");
}

// =============================================================================
// GET /threads/:threadId
// =============================================================================

#[tokio::test]
async fn get_thread_returns_details_with_redacted_comments() {
    let app = TestApp::new();
    let thread_id = app.create_thread().await;
    app.create_comment(&thread_id, OWNER_TOKEN, "komentar pertama").await;
    app.create_comment(&thread_id, OTHER_TOKEN, "komentar kedua").await;
    let third = app.create_comment(&thread_id, OWNER_TOKEN, "komentar ketiga").await;
    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/threads/{}/comments/{}", thread_id, third),
            Some(OWNER_TOKEN),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .send(Method::GET, &format!("/threads/{}", thread_id), None, None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    let thread = &body["data"]["thread"];
    assert_eq!(thread["id"], thread_id.as_str());
    assert_eq!(thread["title"], "sebuah thread");
    assert_eq!(thread["body"], "sebuah body thread");
    assert_eq!(thread["username"], "dicoding");
    assert!(thread["date"].is_string());

    let comments = thread["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 3);
    assert_eq!(comments[0]["content"], "komentar pertama");
    assert_eq!(comments[1]["content"], "komentar kedua");
    assert_eq!(comments[1]["username"], "johndoe");
    assert_eq!(comments[2]["content"], "**komentar telah dihapus**");
    for comment in comments {
        assert!(comment.get("is_delete").is_none());
        assert!(comment.get("owner").is_none());
    }
}

#[tokio::test]
async fn get_unknown_thread_returns_404() {
    let app = TestApp::new();

    let (status, body) = app
        .send(Method::GET, "/threads/thread-404", None, None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "thread tidak ditemukan");
}

// =============================================================================
// POST /threads/:threadId/comments
// =============================================================================

#[tokio::test]
async fn post_comment_returns_201_with_added_comment() {
    let app = TestApp::new();
    let thread_id = app.create_thread().await;

    let (status, body) = app
        .post_json(
            &format!("/threads/{}/comments", thread_id),
            Some(OWNER_TOKEN),
            json!({ "content": "lorem ipsum dolor sit amet" }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let added = &body["data"]["addedComment"];
    assert!(added["id"].as_str().unwrap().starts_with("comment-"));
    assert_eq!(added["content"], "lorem ipsum dolor sit amet");
    assert_eq!(added["owner"], "user-123");
}

#[tokio::test]
async fn post_comment_on_missing_thread_returns_404() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/threads/thread-404/comments",
            Some(OWNER_TOKEN),
            json!({ "content": "halo" }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "tidak dapat menemukan data thread");
}

#[tokio::test]
async fn post_comment_without_content_returns_400() {
    let app = TestApp::new();
    let thread_id = app.create_thread().await;

    let (status, body) = app
        .post_json(
            &format!("/threads/{}/comments", thread_id),
            Some(OWNER_TOKEN),
            json!({}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "tidak dapat membuat comment baru karena properti yang dibutuhkan tidak ada"
    );
}

#[tokio::test]
async fn post_comment_with_wrong_type_returns_400() {
    let app = TestApp::new();
    let thread_id = app.create_thread().await;

    let (status, body) = app
        .post_json(
            &format!("/threads/{}/comments", thread_id),
            Some(OWNER_TOKEN),
            json!({ "content": 42 }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "tidak dapat membuat comment baru karena tipe data tidak sesuai"
    );
}

// =============================================================================
// DELETE /threads/:threadId/comments/:commentId
// =============================================================================

#[tokio::test]
async fn delete_own_comment_returns_200_and_soft_deletes() {
    let app = TestApp::new();
    let thread_id = app.create_thread().await;
    let comment_id = app.create_comment(&thread_id, OWNER_TOKEN, "halo").await;

    let (status, body) = app
        .send(
            Method::DELETE,
            &format!("/threads/{}/comments/{}", thread_id, comment_id),
            Some(OWNER_TOKEN),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success" }));
    assert_eq!(
        app.store.is_comment_deleted(&CommentId::new(comment_id)).await,
        Some(true)
    );
}

#[tokio::test]
async fn delete_already_deleted_comment_returns_404() {
    let app = TestApp::new();
    let thread_id = app.create_thread().await;
    let comment_id = app.create_comment(&thread_id, OWNER_TOKEN, "halo").await;
    let uri = format!("/threads/{}/comments/{}", thread_id, comment_id);
    app.send(Method::DELETE, &uri, Some(OWNER_TOKEN), None).await;

    let (status, body) = app.send(Method::DELETE, &uri, Some(OWNER_TOKEN), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "tidak dapat menemukan data comment");
}

#[tokio::test]
async fn delete_someone_elses_comment_returns_403() {
    let app = TestApp::new();
    let thread_id = app.create_thread().await;
    let comment_id = app.create_comment(&thread_id, OWNER_TOKEN, "halo").await;

    let (status, body) = app
        .send(
            Method::DELETE,
            &format!("/threads/{}/comments/{}", thread_id, comment_id),
            Some(OTHER_TOKEN),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "anda tidak dapat mengakses comment ini");
    assert_eq!(
        app.store.is_comment_deleted(&CommentId::new(comment_id)).await,
        Some(false)
    );
}

#[tokio::test]
async fn delete_comment_on_missing_thread_returns_404() {
    let app = TestApp::new();
    let thread_id = app.create_thread().await;
    let comment_id = app.create_comment(&thread_id, OWNER_TOKEN, "halo").await;

    let (status, body) = app
        .send(
            Method::DELETE,
            &format!("/threads/thread-404/comments/{}", comment_id),
            Some(OWNER_TOKEN),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "tidak dapat menemukan data thread");
}

#[tokio::test]
async fn delete_comment_for_unknown_user_returns_404_and_keeps_comment() {
    let app = TestApp::new();
    let thread_id = app.create_thread().await;
    let comment_id = app.create_comment(&thread_id, OWNER_TOKEN, "halo").await;

    let (status, body) = app
        .send(
            Method::DELETE,
            &format!("/threads/{}/comments/{}", thread_id, comment_id),
            Some(GHOST_TOKEN),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "tidak dapat menemukan data user");
    assert_eq!(
        app.store.is_comment_deleted(&CommentId::new(comment_id)).await,
        Some(false)
    );
}

#[tokio::test]
async fn delete_comment_without_token_returns_401() {
    let app = TestApp::new();

    let (status, _) = app
        .send(
            Method::DELETE,
            "/threads/thread-123/comments/comment-123",
            None,
            None,
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
