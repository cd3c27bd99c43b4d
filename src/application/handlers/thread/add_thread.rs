//! AddThreadHandler - Command handler for opening a new thread.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::thread::{CreatedThread, NewThread};
use crate::ports::{ThreadRepository, UserRepository};

/// Handler for creating threads.
///
/// Validates the payload, confirms the author exists, then performs a
/// single insert.
pub struct AddThreadHandler {
    users: Arc<dyn UserRepository>,
    threads: Arc<dyn ThreadRepository>,
}

impl AddThreadHandler {
    pub fn new(users: Arc<dyn UserRepository>, threads: Arc<dyn ThreadRepository>) -> Self {
        Self { users, threads }
    }

    #[tracing::instrument(name = "add_thread", skip_all)]
    pub async fn handle(&self, payload: &Value) -> Result<CreatedThread, DomainError> {
        let request = NewThread::from_payload(payload)?;

        self.users.get_user_by_id(&request.user_id).await?;
        debug!(user_id = %request.user_id, "thread author verified");

        let created = self.threads.add_thread(&request).await?;
        debug!(thread_id = %created.id, "thread created");

        Ok(created)
    }
}
