//! Subscription aggregate entity.
//!
//! # Design Decisions
//!
//! - **Features are derived**: the feature list is read from the plan
//!   catalog on every call and never stored or serialized.
//! - **Fail-secure**: an inactive subscription or a lapsed trial is
//!   entitled to nothing, not to the trial tier.
//! - **Trial only at signup**: no plan change can move back to trial.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StateMachine, SubscriptionId, Timestamp, UserId};
use crate::domain::plan::{Plan, PlanLimits, PlanTier};

use super::{SubscriptionError, SubscriptionStatus};

/// Outcome of a successful plan change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanChange {
    Upgrade,
    Downgrade,
    /// Same plan, cancelled or expired subscription made active again.
    Reactivation,
}

/// A user's subscription.
///
/// # Invariants
///
/// - `trial_ends_at` is only set while `plan` is trial
/// - Status transitions follow the state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub user_id: UserId,
    pub plan: PlanTier,
    pub status: SubscriptionStatus,
    pub trial_ends_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub cancelled_at: Option<Timestamp>,
}

impl Subscription {
    /// Create the trial subscription assigned at signup or demo login.
    pub fn start_trial(user_id: UserId, trial_days: u32) -> Self {
        Self::start_trial_at(user_id, trial_days, Timestamp::now())
    }

    /// Same as [`Subscription::start_trial`] with an explicit clock.
    pub fn start_trial_at(user_id: UserId, trial_days: u32, now: Timestamp) -> Self {
        Self {
            id: SubscriptionId::new(),
            user_id,
            plan: PlanTier::Trial,
            status: SubscriptionStatus::Active,
            trial_ends_at: Some(now.add_days(i64::from(trial_days))),
            created_at: now,
            updated_at: now,
            cancelled_at: None,
        }
    }

    /// Features of the current plan, recomputed from the catalog.
    pub fn features(&self) -> &'static [&'static str] {
        Plan::for_tier(self.plan).features
    }

    pub fn limits(&self) -> PlanLimits {
        Plan::for_tier(self.plan).limits
    }

    pub fn is_trial(&self) -> bool {
        self.plan == PlanTier::Trial
    }

    /// True once the trial end has passed.
    pub fn is_trial_expired_at(&self, now: Timestamp) -> bool {
        self.trial_ends_at
            .map(|ends| !now.is_before(&ends))
            .unwrap_or(false)
    }

    pub fn is_trial_expired(&self) -> bool {
        self.is_trial_expired_at(Timestamp::now())
    }

    /// Days left in the trial, `None` for paid plans.
    pub fn trial_days_remaining_at(&self, now: Timestamp) -> Option<u32> {
        self.trial_ends_at.map(|ends| now.days_until(&ends))
    }

    /// The tier this subscription currently grants.
    ///
    /// `None` when inactive or when the trial has lapsed.
    pub fn entitled_tier_at(&self, now: Timestamp) -> Option<PlanTier> {
        if !self.status.is_entitled() || self.is_trial_expired_at(now) {
            return None;
        }
        Some(self.plan)
    }

    pub fn entitled_tier(&self) -> Option<PlanTier> {
        self.entitled_tier_at(Timestamp::now())
    }

    /// Move to another paid plan.
    ///
    /// # Errors
    ///
    /// - `InvalidPlanChange` if `new_plan` is trial, or equals the current
    ///   plan on an active subscription
    pub fn change_plan(&mut self, new_plan: PlanTier) -> Result<PlanChange, SubscriptionError> {
        if new_plan == PlanTier::Trial {
            return Err(SubscriptionError::invalid_plan_change(
                "the free trial is only available at signup",
            ));
        }

        let reactivating = !self.status.is_entitled();
        if new_plan == self.plan && !reactivating {
            return Err(SubscriptionError::invalid_plan_change(format!(
                "already subscribed to {}",
                new_plan.display_name()
            )));
        }

        let change = if new_plan.rank() > self.plan.rank() {
            PlanChange::Upgrade
        } else if new_plan.rank() < self.plan.rank() {
            PlanChange::Downgrade
        } else {
            PlanChange::Reactivation
        };

        self.transition_to(SubscriptionStatus::Active, "change plan of")?;
        self.plan = new_plan;
        self.trial_ends_at = None;
        self.cancelled_at = None;
        self.updated_at = Timestamp::now();
        Ok(change)
    }

    /// Cancel the subscription.
    ///
    /// # Errors
    ///
    /// Returns error unless the subscription is active.
    pub fn cancel(&mut self) -> Result<(), SubscriptionError> {
        self.transition_to(SubscriptionStatus::Cancelled, "cancel")?;
        let now = Timestamp::now();
        self.cancelled_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    /// Mark the subscription expired.
    ///
    /// # Errors
    ///
    /// Returns error if already expired.
    pub fn expire(&mut self) -> Result<(), SubscriptionError> {
        self.transition_to(SubscriptionStatus::Expired, "expire")?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Expire an active trial whose end has passed.
    ///
    /// Returns true if the status changed.
    pub fn expire_if_trial_ended(&mut self, now: Timestamp) -> bool {
        if self.status != SubscriptionStatus::Active || !self.is_trial_expired_at(now) {
            return false;
        }
        if self.transition_to(SubscriptionStatus::Expired, "expire").is_err() {
            return false;
        }
        self.updated_at = now;
        true
    }

    fn transition_to(
        &mut self,
        target: SubscriptionStatus,
        attempted: &str,
    ) -> Result<(), SubscriptionError> {
        let current = self.status;
        self.status = current
            .transition_to(target)
            .map_err(|_| SubscriptionError::invalid_state(current.as_str(), attempted))?;
        Ok(())
    }
}
