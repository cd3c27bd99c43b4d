//! Response DTOs for thread and comment endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::comment::{CommentView, CreatedComment};
use crate::domain::thread::{CreatedThread, ThreadDetail};

/// `{ "status": "success", "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub status: String,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}

/// `{ "status": "success" }` for commands with no payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadData {
    pub added_thread: CreatedThread,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentData {
    pub added_comment: CreatedComment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadData {
    pub thread: ThreadResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
}

impl From<CommentView> for CommentResponse {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.id.into_inner(),
            username: view.username,
            date: view.date.to_rfc3339(),
            content: view.content,
        }
    }
}

impl From<ThreadDetail> for ThreadResponse {
    fn from(detail: ThreadDetail) -> Self {
        Self {
            id: detail.id.into_inner(),
            title: detail.title,
            body: detail.body,
            date: detail.date.to_rfc3339(),
            username: detail.username,
            comments: detail.comments.into_iter().map(Into::into).collect(),
        }
    }
}

/// Builds a handler payload from a raw request body.
///
/// Bodies that are not JSON objects become an empty object so that payload
/// validation reports the missing properties. Each `(key, value)` in
/// `overrides` (authenticated user id, path parameters) replaces whatever
/// the body carried under that key.
pub fn payload_from_body(body: &[u8], overrides: &[(&str, &str)]) -> Value {
    let mut object = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    for (key, value) in overrides {
        object.insert((*key).to_string(), Value::String((*value).to_string()));
    }
    Value::Object(object)
}
