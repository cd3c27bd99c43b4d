//! Error responses for the forum HTTP API.
//!
//! Every handler failure funnels through [`handle_forum_error`], which asks
//! the [`DomainErrorTranslator`] for a client-facing classification and picks
//! the status code from it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClientError, DomainError, DomainErrorTranslator, TranslatedError};

/// Message returned for every unclassified server-side failure.
pub const SERVER_FAILURE_MESSAGE: &str = "terjadi kegagalan pada server kami";

/// Standard failure body: `{ "status": "fail" | "error", "message": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    /// Client-side failure (4xx).
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "fail".to_string(),
            message: message.into(),
        }
    }

    /// Server-side failure (5xx).
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Maps a domain error to an HTTP response.
pub fn handle_forum_error(error: DomainError) -> Response {
    match DomainErrorTranslator::translate(error) {
        TranslatedError::Client(client) => {
            let status = match &client {
                ClientError::Invariant(_) => StatusCode::BAD_REQUEST,
                ClientError::NotFound(_) => StatusCode::NOT_FOUND,
                ClientError::Authorization(_) => StatusCode::FORBIDDEN,
            };
            (status, Json(ErrorResponse::fail(client.message()))).into_response()
        }
        TranslatedError::Passthrough(error) if error.code.is_not_found() => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::fail(error.message))).into_response()
        }
        TranslatedError::Passthrough(error) => {
            tracing::error!(code = %error.code, error = %error, "request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::error(SERVER_FAILURE_MESSAGE)),
            )
                .into_response()
        }
    }
}
