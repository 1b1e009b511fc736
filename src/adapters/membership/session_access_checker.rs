//! AccessChecker backed by a SessionStore.
//!
//! Loads the user's session and delegates to [`FeatureGate`]. A missing
//! session denies with `NoSubscription`; a store failure is logged and
//! denied the same way.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::domain::account::UserSession;
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::plan::LimitedResource;
use crate::domain::subscription::{AccessResult, FeatureGate, GatedFeature};
use crate::ports::{AccessChecker, SessionStore};

pub struct SessionAccessChecker {
    store: Arc<dyn SessionStore>,
}

impl SessionAccessChecker {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    async fn session(&self, user_id: &UserId) -> Option<UserSession> {
        match self.store.load(user_id).await {
            Ok(session) => session,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Session store failed, denying access");
                None
            }
        }
    }
}

#[async_trait]
impl AccessChecker for SessionAccessChecker {
    async fn check_feature(&self, user_id: &UserId, feature: GatedFeature) -> AccessResult {
        let session = self.session(user_id).await;
        FeatureGate::check_feature(
            session.as_ref().map(|s| &s.subscription),
            feature,
            Timestamp::now(),
        )
    }

    async fn check_limit(
        &self,
        user_id: &UserId,
        resource: LimitedResource,
        current_usage: u32,
    ) -> AccessResult {
        let session = self.session(user_id).await;
        FeatureGate::check_limit(
            session.as_ref().map(|s| &s.subscription),
            resource,
            current_usage,
            Timestamp::now(),
        )
    }
}
