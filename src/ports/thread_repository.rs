//! Thread repository port.
//!
//! Defines the capability set for creating and looking up threads.
//! Implementations assign thread ids (`thread-…`) and creation dates.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ThreadId};
use crate::domain::thread::{CreatedThread, NewThread, ThreadRecord};

/// Repository port for threads.
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persist a new thread owned by `thread.user_id`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn add_thread(&self, thread: &NewThread) -> Result<CreatedThread, DomainError>;

    /// Fetch a thread joined with its author's username.
    ///
    /// # Errors
    ///
    /// - `GetThreadDetailsDataNotFound` if the thread does not exist
    /// - `DatabaseError` on persistence failure
    async fn get_thread_by_id(&self, id: &ThreadId) -> Result<ThreadRecord, DomainError>;

    /// Succeeds only if the thread exists.
    ///
    /// # Errors
    ///
    /// - `VerifyThreadDataNotFound` if the thread does not exist
    /// - `DatabaseError` on persistence failure
    async fn verify_available_thread_by_id(&self, id: &ThreadId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ThreadRepository) {}
    }
}
