//! Translation of machine error codes into classified client errors.
//!
//! This is the single place where a domain code gains a user-facing meaning.
//! The table is an exhaustive `match`, so adding an [`ErrorCode`] forces a
//! decision here at compile time.

use thiserror::Error;

use super::{DomainError, ErrorCode};

/// Classified, user-facing error. The variant decides the transport status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Malformed, missing or mistyped request fields.
    #[error("{0}")]
    Invariant(String),

    /// A referenced user, thread or comment does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The authenticated user does not own the resource.
    #[error("{0}")]
    Authorization(String),
}

impl ClientError {
    /// Returns the localized message.
    pub fn message(&self) -> &str {
        match self {
            ClientError::Invariant(m) | ClientError::NotFound(m) | ClientError::Authorization(m) => m,
        }
    }
}

/// Outcome of translating a [`DomainError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslatedError {
    /// The code is mapped to a classified error.
    #[error(transparent)]
    Client(ClientError),

    /// The code is not mapped; the original error is returned unchanged.
    #[error(transparent)]
    Passthrough(DomainError),
}

/// Static code → classified error table.
pub struct DomainErrorTranslator;

impl DomainErrorTranslator {
    /// Translates `error`, returning it untouched when its code has no mapping.
    pub fn translate(error: DomainError) -> TranslatedError {
        match Self::lookup(error.code) {
            Some(client) => TranslatedError::Client(client),
            None => TranslatedError::Passthrough(error),
        }
    }

    /// Looks up the classified error for `code`.
    pub fn lookup(code: ErrorCode) -> Option<ClientError> {
        use ClientError::{Authorization, Invariant, NotFound};

        let client = match code {
            ErrorCode::AddThreadNotContainNeededProperty => Invariant(
                "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada".into(),
            ),
            ErrorCode::AddThreadNotMeetDataTypeSpecification => {
                Invariant("tidak dapat membuat thread baru karena tipe data tidak sesuai".into())
            }
            ErrorCode::VerifyThreadDataNotFound => {
                NotFound("tidak dapat menemukan data thread".into())
            }
            ErrorCode::GetThreadDetailsNotContainNeededProperty => Invariant(
                "tidak dapat mendapatkan thread karena properti yang dibutuhkan tidak ada".into(),
            ),
            ErrorCode::GetThreadDetailsNotMeetDataTypeSpecification => {
                Invariant("tidak dapat mendapatkan thread karena tipe data tidak sesuai".into())
            }
            ErrorCode::AddCommentNotContainNeededProperty => Invariant(
                "tidak dapat membuat comment baru karena properti yang dibutuhkan tidak ada".into(),
            ),
            ErrorCode::AddCommentNotMeetDataTypeSpecification => {
                Invariant("tidak dapat membuat comment baru karena tipe data tidak sesuai".into())
            }
            ErrorCode::DeleteCommentNotContainNeededProperty => Invariant(
                "tidak dapat menghapus comment karena properti yang dibutuhkan tidak ada".into(),
            ),
            ErrorCode::DeleteCommentNotMeetDataTypeSpecification => {
                Invariant("tidak dapat menghapus comment karena tipe data tidak sesuai".into())
            }
            ErrorCode::VerifyCommentDataNotFound => {
                NotFound("tidak dapat menemukan data comment".into())
            }
            ErrorCode::VerifyCommentInvalidOwner => {
                Authorization("anda tidak dapat mengakses comment ini".into())
            }
            ErrorCode::VerifyUserDataNotFound => NotFound("tidak dapat menemukan data user".into()),
            ErrorCode::GetThreadDetailsDataNotFound
            | ErrorCode::DatabaseError => return None,
        };

        Some(client)
    }
}
