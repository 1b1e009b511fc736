//! CancelSubscriptionHandler - Command handler for cancelling subscriptions.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::SessionStore;

/// Command to cancel a user's subscription.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionCommand {
    pub user_id: UserId,
}

/// Result of a successful cancellation.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionResult {
    pub subscription: Subscription,
}

/// Handler for cancelling subscriptions.
///
/// Cancellation takes effect immediately: gated features are denied
/// until the user picks a plan again.
pub struct CancelSubscriptionHandler {
    store: Arc<dyn SessionStore>,
}

impl CancelSubscriptionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CancelSubscriptionCommand,
    ) -> Result<CancelSubscriptionResult, SubscriptionError> {
        let mut session = self
            .store
            .load(&cmd.user_id)
            .await
            .map_err(|e| SubscriptionError::storage(e.to_string()))?
            .ok_or_else(|| SubscriptionError::SessionNotFound(cmd.user_id.clone()))?;

        session.subscription.cancel()?;

        self.store
            .save(&session)
            .await
            .map_err(|e| SubscriptionError::storage(e.to_string()))?;

        info!(
            user_id = %cmd.user_id,
            plan = session.subscription.plan.as_str(),
            "Subscription cancelled"
        );

        Ok(CancelSubscriptionResult {
            subscription: session.subscription,
        })
    }
}
