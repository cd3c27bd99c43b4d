//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Machine-readable error codes raised by value objects and repositories.
///
/// The set is closed: every code is either mapped to a classified client
/// error by [`DomainErrorTranslator`](super::DomainErrorTranslator) or passes
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Thread payloads
    AddThreadNotContainNeededProperty,
    AddThreadNotMeetDataTypeSpecification,
    GetThreadDetailsNotContainNeededProperty,
    GetThreadDetailsNotMeetDataTypeSpecification,

    // Thread lookups
    GetThreadDetailsDataNotFound,
    VerifyThreadDataNotFound,

    // Comment payloads
    AddCommentNotContainNeededProperty,
    AddCommentNotMeetDataTypeSpecification,
    DeleteCommentNotContainNeededProperty,
    DeleteCommentNotMeetDataTypeSpecification,

    // Comment lookups
    VerifyCommentDataNotFound,
    VerifyCommentInvalidOwner,

    // User lookups
    VerifyUserDataNotFound,

    // Infrastructure errors
    DatabaseError,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 14] = [
        ErrorCode::AddThreadNotContainNeededProperty,
        ErrorCode::AddThreadNotMeetDataTypeSpecification,
        ErrorCode::GetThreadDetailsNotContainNeededProperty,
        ErrorCode::GetThreadDetailsNotMeetDataTypeSpecification,
        ErrorCode::GetThreadDetailsDataNotFound,
        ErrorCode::VerifyThreadDataNotFound,
        ErrorCode::AddCommentNotContainNeededProperty,
        ErrorCode::AddCommentNotMeetDataTypeSpecification,
        ErrorCode::DeleteCommentNotContainNeededProperty,
        ErrorCode::DeleteCommentNotMeetDataTypeSpecification,
        ErrorCode::VerifyCommentDataNotFound,
        ErrorCode::VerifyCommentInvalidOwner,
        ErrorCode::VerifyUserDataNotFound,
        ErrorCode::DatabaseError,
    ];

    /// Returns the wire representation, e.g. `VERIFY_COMMENT.INVALID_OWNER`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AddThreadNotContainNeededProperty => "ADD_THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
            ErrorCode::AddThreadNotMeetDataTypeSpecification => {
                "ADD_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION"
            }
            ErrorCode::GetThreadDetailsNotContainNeededProperty => {
                "GET_THREAD_DETAILS.NOT_CONTAIN_NEEDED_PROPERTY"
            }
            ErrorCode::GetThreadDetailsNotMeetDataTypeSpecification => {
                "GET_THREAD_DETAILS.NOT_MEET_DATA_TYPE_SPECIFICATION"
            }
            ErrorCode::GetThreadDetailsDataNotFound => "GET_THREAD_DETAILS.DATA_NOT_FOUND",
            ErrorCode::VerifyThreadDataNotFound => "VERIFY_THREAD.DATA_NOT_FOUND",
            ErrorCode::AddCommentNotContainNeededProperty => "ADD_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
            ErrorCode::AddCommentNotMeetDataTypeSpecification => {
                "ADD_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION"
            }
            ErrorCode::DeleteCommentNotContainNeededProperty => {
                "DELETE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY"
            }
            ErrorCode::DeleteCommentNotMeetDataTypeSpecification => {
                "DELETE_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION"
            }
            ErrorCode::VerifyCommentDataNotFound => "VERIFY_COMMENT.DATA_NOT_FOUND",
            ErrorCode::VerifyCommentInvalidOwner => "VERIFY_COMMENT.INVALID_OWNER",
            ErrorCode::VerifyUserDataNotFound => "VERIFY_USER.DATA_NOT_FOUND",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// True for codes signalling that a referenced resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::GetThreadDetailsDataNotFound
                | ErrorCode::VerifyThreadDataNotFound
                | ErrorCode::VerifyCommentDataNotFound
                | ErrorCode::VerifyUserDataNotFound
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates an error whose message is the machine code itself.
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.as_str())
    }

    /// Creates a database error wrapping an adapter failure.
    pub fn database(context: &str, source: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, format!("{}: {}", context, source))
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
