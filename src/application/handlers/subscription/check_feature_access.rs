//! CheckFeatureAccessHandler - Query handler for gated features.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::plan::PlanTier;
use crate::domain::subscription::{AccessResult, GatedFeature};
use crate::ports::AccessChecker;

/// Query to check whether a user may use a feature.
#[derive(Debug, Clone)]
pub struct CheckFeatureAccessQuery {
    pub user_id: UserId,
    pub feature: GatedFeature,
}

/// Access decision plus the plan that would unlock the feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFeatureAccessResult {
    pub access: AccessResult,
    pub upgrade_to: Option<PlanTier>,
}

impl CheckFeatureAccessResult {
    pub fn is_allowed(&self) -> bool {
        self.access.is_allowed()
    }
}

/// Handler for feature access checks.
///
/// Called on every gated screen render. Never fails: the checker denies
/// when it cannot decide.
pub struct CheckFeatureAccessHandler {
    checker: Arc<dyn AccessChecker>,
}

impl CheckFeatureAccessHandler {
    pub fn new(checker: Arc<dyn AccessChecker>) -> Self {
        Self { checker }
    }

    pub async fn handle(&self, query: CheckFeatureAccessQuery) -> CheckFeatureAccessResult {
        let access = self
            .checker
            .check_feature(&query.user_id, query.feature)
            .await;
        let upgrade_to = access.upgrade_target();

        CheckFeatureAccessResult { access, upgrade_to }
    }
}
