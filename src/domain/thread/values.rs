//! Request value objects for thread operations.

use serde_json::Value;

use crate::domain::foundation::{required_strings, DomainError, ErrorCode, PayloadCodes, ThreadId, UserId};

const NEW_THREAD_CODES: PayloadCodes = PayloadCodes {
    missing: ErrorCode::AddThreadNotContainNeededProperty,
    mistyped: ErrorCode::AddThreadNotMeetDataTypeSpecification,
};

const GET_THREAD_DETAILS_CODES: PayloadCodes = PayloadCodes {
    missing: ErrorCode::GetThreadDetailsNotContainNeededProperty,
    mistyped: ErrorCode::GetThreadDetailsNotMeetDataTypeSpecification,
};

/// Validated request to open a new thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

impl NewThread {
    /// Validates a `{ userId, title, body }` payload.
    ///
    /// # Errors
    ///
    /// - `AddThreadNotContainNeededProperty` when a field is absent
    /// - `AddThreadNotMeetDataTypeSpecification` when a field is not a string
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        let [user_id, title, body] =
            required_strings(payload, ["userId", "title", "body"], NEW_THREAD_CODES)?;

        Ok(Self {
            user_id: UserId::new(user_id),
            title,
            body,
        })
    }
}

/// Validated request to read a thread with its comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetThreadDetails {
    pub thread_id: ThreadId,
}

impl GetThreadDetails {
    /// Validates a `{ threadId }` payload.
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        let [thread_id] = required_strings(payload, ["threadId"], GET_THREAD_DETAILS_CODES)?;

        Ok(Self {
            thread_id: ThreadId::new(thread_id),
        })
    }
}
