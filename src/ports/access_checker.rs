//! Access control port for plan-gated features.
//!
//! # Design
//!
//! The AccessChecker is **fail-secure**: implementations must deny access
//! when the user has no session, when the subscription is not entitled,
//! and when their backing store fails. There is no error channel.
//!
//! # Example
//!
//! ```ignore
//! match access_checker.check_feature(&user_id, GatedFeature::AiBuyButton).await {
//!     AccessResult::Allowed => render_generator(),
//!     AccessResult::Denied(reason) => render_upgrade_prompt(reason),
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::plan::LimitedResource;
use crate::domain::subscription::{AccessResult, GatedFeature};

/// Port for checking user access based on subscription.
#[async_trait]
pub trait AccessChecker: Send + Sync {
    /// Check whether the user may use a gated feature.
    async fn check_feature(&self, user_id: &UserId, feature: GatedFeature) -> AccessResult;

    /// Check whether the user may add one more unit of a capped resource.
    async fn check_limit(
        &self,
        user_id: &UserId,
        resource: LimitedResource,
        current_usage: u32,
    ) -> AccessResult;
}
