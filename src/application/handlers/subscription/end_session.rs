//! EndSessionHandler - Command handler for logout.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::subscription::SubscriptionError;
use crate::ports::SessionStore;

/// Command to sign a user out.
#[derive(Debug, Clone)]
pub struct EndSessionCommand {
    pub user_id: UserId,
}

/// Result of a logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndSessionResult {
    /// False when the user was already signed out.
    pub was_signed_in: bool,
}

/// Handler for logout. Idempotent.
pub struct EndSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl EndSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: EndSessionCommand) -> Result<EndSessionResult, SubscriptionError> {
        let was_signed_in = self
            .store
            .clear(&cmd.user_id)
            .await
            .map_err(|e| SubscriptionError::storage(e.to_string()))?;

        if was_signed_in {
            info!(user_id = %cmd.user_id, "Session ended");
        }

        Ok(EndSessionResult { was_signed_in })
    }
}
