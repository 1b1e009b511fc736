//! ChangePlanHandler - Command handler for upgrades, downgrades and reactivation.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::plan::PlanTier;
use crate::domain::subscription::{PlanChange, Subscription, SubscriptionError};
use crate::ports::SessionStore;

/// Command to move a user onto another plan.
#[derive(Debug, Clone)]
pub struct ChangePlanCommand {
    pub user_id: UserId,
    /// Catalog identifier, e.g. `"pro"`. Matched exactly.
    pub plan: String,
}

/// Result of a successful plan change.
#[derive(Debug, Clone)]
pub struct ChangePlanResult {
    pub subscription: Subscription,
    pub change: PlanChange,
    pub previous_plan: PlanTier,
}

/// Handler for changing plans.
pub struct ChangePlanHandler {
    store: Arc<dyn SessionStore>,
}

impl ChangePlanHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ChangePlanCommand) -> Result<ChangePlanResult, SubscriptionError> {
        // 1. Parse the plan strictly; unknown ids never reach the aggregate
        let new_plan: PlanTier = cmd
            .plan
            .parse()
            .map_err(|_| SubscriptionError::invalid_plan(cmd.plan.as_str()))?;

        // 2. Find the user's session
        let mut session = self
            .store
            .load(&cmd.user_id)
            .await
            .map_err(|e| SubscriptionError::storage(e.to_string()))?
            .ok_or_else(|| SubscriptionError::SessionNotFound(cmd.user_id.clone()))?;

        let previous_plan = session.subscription.plan;

        // 3. Apply the change (domain logic)
        let change = session.subscription.change_plan(new_plan)?;

        // 4. Persist the update
        self.store
            .save(&session)
            .await
            .map_err(|e| SubscriptionError::storage(e.to_string()))?;

        info!(
            user_id = %cmd.user_id,
            from = previous_plan.as_str(),
            to = new_plan.as_str(),
            change = ?change,
            "Plan changed"
        );

        Ok(ChangePlanResult {
            subscription: session.subscription,
            change,
            previous_plan,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;
    use crate::domain::account::{SessionOrigin, UserProfile, UserRole, UserSession};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::subscription::SubscriptionStatus;

    fn user_id() -> UserId {
        UserId::new("agency-2").unwrap()
    }

    async fn signed_in_store() -> Arc<InMemorySessionStore> {
        let store = Arc::new(InMemorySessionStore::new());
        let profile =
            UserProfile::try_new(user_id(), "ops@agency.io", "Ops", UserRole::Agency).unwrap();
        let session = UserSession::start(profile, SessionOrigin::Signup, 14);
        store.save(&session).await.unwrap();
        store
    }

    fn command(plan: &str) -> ChangePlanCommand {
        ChangePlanCommand {
            user_id: user_id(),
            plan: plan.to_string(),
        }
    }

    #[tokio::test]
    async fn upgrade_from_trial_persists_new_plan() {
        let store = signed_in_store().await;
        let handler = ChangePlanHandler::new(store.clone());

        let result = handler.handle(command("pro")).await.unwrap();

        assert_eq!(result.change, PlanChange::Upgrade);
        assert_eq!(result.previous_plan, PlanTier::Trial);
        assert_eq!(result.subscription.trial_ends_at, None);

        let stored = store.load(&user_id()).await.unwrap().unwrap();
        assert_eq!(stored.subscription.plan, PlanTier::Pro);
    }

    #[tokio::test]
    async fn downgrade_is_reported() {
        let store = signed_in_store().await;
        let handler = ChangePlanHandler::new(store);
        handler.handle(command("enterprise")).await.unwrap();

        let result = handler.handle(command("starter")).await.unwrap();

        assert_eq!(result.change, PlanChange::Downgrade);
        assert_eq!(result.previous_plan, PlanTier::Enterprise);
    }

    #[tokio::test]
    async fn unknown_plan_is_rejected() {
        let store = signed_in_store().await;
        let handler = ChangePlanHandler::new(store);

        let err = handler.handle(command("Pro")).await.unwrap_err();

        assert_eq!(err, SubscriptionError::invalid_plan("Pro"));
        assert_eq!(err.code(), ErrorCode::InvalidPlan);
    }

    #[tokio::test]
    async fn moving_back_to_trial_is_rejected() {
        let store = signed_in_store().await;
        let handler = ChangePlanHandler::new(store);
        handler.handle(command("starter")).await.unwrap();

        let err = handler.handle(command("trial")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let handler = ChangePlanHandler::new(Arc::new(InMemorySessionStore::new()));

        let err = handler.handle(command("pro")).await.unwrap_err();

        assert_eq!(err, SubscriptionError::SessionNotFound(user_id()));
    }

    #[tokio::test]
    async fn cancelled_subscription_is_reactivated() {
        let store = signed_in_store().await;
        let handler = ChangePlanHandler::new(store.clone());
        handler.handle(command("pro")).await.unwrap();

        let mut session = store.load(&user_id()).await.unwrap().unwrap();
        session.subscription.cancel().unwrap();
        store.save(&session).await.unwrap();

        let result = handler.handle(command("pro")).await.unwrap();

        assert_eq!(result.change, PlanChange::Reactivation);
        assert_eq!(result.subscription.status, SubscriptionStatus::Active);
        assert_eq!(result.subscription.cancelled_at, None);
    }
}
