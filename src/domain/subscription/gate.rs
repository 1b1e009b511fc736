//! Feature gating.
//!
//! Dashboard surfaces ask the gate whether to render gated content or an
//! upgrade prompt. The gate is fail-secure: no subscription, an inactive
//! subscription, or a lapsed trial denies everything.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::plan::{LimitedResource, Plan, PlanTier};

use super::{Subscription, SubscriptionStatus};

/// Dashboard features that require a minimum plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatedFeature {
    SeoTools,
    KeywordTracking,
    ReviewManager,
    HeadlineGenerator,
    SocialMedia,
    AiBuyButton,
    ShopifyIntegration,
    AdvancedReports,
    WhiteLabel,
    ApiAccess,
}

impl GatedFeature {
    pub const ALL: [GatedFeature; 10] = [
        GatedFeature::SeoTools,
        GatedFeature::KeywordTracking,
        GatedFeature::ReviewManager,
        GatedFeature::HeadlineGenerator,
        GatedFeature::SocialMedia,
        GatedFeature::AiBuyButton,
        GatedFeature::ShopifyIntegration,
        GatedFeature::AdvancedReports,
        GatedFeature::WhiteLabel,
        GatedFeature::ApiAccess,
    ];

    /// Lowest plan that unlocks this feature.
    pub fn required_tier(&self) -> PlanTier {
        match self {
            GatedFeature::SeoTools | GatedFeature::KeywordTracking => PlanTier::Trial,
            GatedFeature::ReviewManager
            | GatedFeature::HeadlineGenerator
            | GatedFeature::SocialMedia => PlanTier::Starter,
            GatedFeature::AiBuyButton
            | GatedFeature::ShopifyIntegration
            | GatedFeature::AdvancedReports => PlanTier::Pro,
            GatedFeature::WhiteLabel | GatedFeature::ApiAccess => PlanTier::Enterprise,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GatedFeature::SeoTools => "SEO tools",
            GatedFeature::KeywordTracking => "Keyword tracking",
            GatedFeature::ReviewManager => "Review manager",
            GatedFeature::HeadlineGenerator => "Headline generator",
            GatedFeature::SocialMedia => "Social media management",
            GatedFeature::AiBuyButton => "AI buy button generator",
            GatedFeature::ShopifyIntegration => "Shopify integration",
            GatedFeature::AdvancedReports => "Advanced reports",
            GatedFeature::WhiteLabel => "White label reports",
            GatedFeature::ApiAccess => "API access",
        }
    }
}

/// Result of an access check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "reason", rename_all = "snake_case")]
pub enum AccessResult {
    Allowed,
    Denied(AccessDeniedReason),
}

impl AccessResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessResult::Allowed)
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, AccessResult::Denied(_))
    }

    /// Converts the result to a Result type, with denied becoming an error.
    pub fn into_result(self) -> Result<(), AccessDeniedReason> {
        match self {
            AccessResult::Allowed => Ok(()),
            AccessResult::Denied(reason) => Err(reason),
        }
    }

    /// Plan to suggest in an upgrade prompt, if any.
    pub fn upgrade_target(&self) -> Option<PlanTier> {
        match self {
            AccessResult::Denied(AccessDeniedReason::UpgradeRequired { required, .. }) => {
                Some(*required)
            }
            AccessResult::Denied(AccessDeniedReason::LimitReached { next_plan, .. }) => *next_plan,
            _ => None,
        }
    }
}

/// Reason why access was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccessDeniedReason {
    /// No session or subscription for the user.
    NoSubscription,

    /// The free trial has ended.
    TrialExpired,

    /// Subscription is cancelled or expired.
    SubscriptionInactive { status: SubscriptionStatus },

    /// Feature needs a higher plan.
    UpgradeRequired {
        feature: GatedFeature,
        current: PlanTier,
        required: PlanTier,
    },

    /// Plan cap reached for a resource.
    LimitReached {
        resource: LimitedResource,
        current: u32,
        max: u32,
        next_plan: Option<PlanTier>,
    },
}

impl AccessDeniedReason {
    /// Get a user-facing message for the denial reason.
    pub fn user_message(&self) -> String {
        match self {
            AccessDeniedReason::NoSubscription => {
                "Sign in or start a free trial to use this feature.".to_string()
            }
            AccessDeniedReason::TrialExpired => {
                "Your free trial has ended. Choose a plan to continue.".to_string()
            }
            AccessDeniedReason::SubscriptionInactive { status } => {
                format!("Your subscription is {}. Choose a plan to continue.", status)
            }
            AccessDeniedReason::UpgradeRequired {
                feature, required, ..
            } => format!(
                "{} requires the {} plan or higher.",
                feature.display_name(),
                required.display_name()
            ),
            AccessDeniedReason::LimitReached {
                resource,
                current,
                max,
                ..
            } => format!(
                "You've reached the limit of {} {} (currently {}). Upgrade for more.",
                max,
                resource.display_name(),
                current
            ),
        }
    }
}

impl std::fmt::Display for AccessDeniedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

/// Evaluates gated features and resource limits against a subscription.
pub struct FeatureGate;

impl FeatureGate {
    /// Decide whether `subscription` may use `feature` at time `now`.
    pub fn check_feature(
        subscription: Option<&Subscription>,
        feature: GatedFeature,
        now: Timestamp,
    ) -> AccessResult {
        let tier = match Self::entitled_tier(subscription, now) {
            Ok(tier) => tier,
            Err(reason) => return AccessResult::Denied(reason),
        };

        let required = feature.required_tier();
        if tier.is_at_least(required) {
            AccessResult::Allowed
        } else {
            AccessResult::Denied(AccessDeniedReason::UpgradeRequired {
                feature,
                current: tier,
                required,
            })
        }
    }

    /// Decide whether one more unit of `resource` fits under the plan cap.
    pub fn check_limit(
        subscription: Option<&Subscription>,
        resource: LimitedResource,
        current_usage: u32,
        now: Timestamp,
    ) -> AccessResult {
        let tier = match Self::entitled_tier(subscription, now) {
            Ok(tier) => tier,
            Err(reason) => return AccessResult::Denied(reason),
        };

        let limit = Plan::for_tier(tier).limits.get(resource);
        match limit.max() {
            Some(max) if limit.is_reached(current_usage) => {
                AccessResult::Denied(AccessDeniedReason::LimitReached {
                    resource,
                    current: current_usage,
                    max,
                    next_plan: tier.next(),
                })
            }
            _ => AccessResult::Allowed,
        }
    }

    fn entitled_tier(
        subscription: Option<&Subscription>,
        now: Timestamp,
    ) -> Result<PlanTier, AccessDeniedReason> {
        let subscription = subscription.ok_or(AccessDeniedReason::NoSubscription)?;
        if !subscription.status.is_entitled() {
            return Err(AccessDeniedReason::SubscriptionInactive {
                status: subscription.status,
            });
        }
        subscription
            .entitled_tier_at(now)
            .ok_or(AccessDeniedReason::TrialExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn subscription_on(plan: PlanTier) -> Subscription {
        let mut sub = Subscription::start_trial(UserId::new("user-1").unwrap(), 14);
        if plan != PlanTier::Trial {
            sub.change_plan(plan).unwrap();
        }
        sub
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Feature checks
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn no_subscription_is_denied() {
        let result = FeatureGate::check_feature(None, GatedFeature::SeoTools, Timestamp::now());
        assert_eq!(result, AccessResult::Denied(AccessDeniedReason::NoSubscription));
    }

    #[test]
    fn trial_can_use_trial_features() {
        let sub = subscription_on(PlanTier::Trial);
        let result = FeatureGate::check_feature(Some(&sub), GatedFeature::SeoTools, Timestamp::now());
        assert!(result.is_allowed());
    }

    #[test]
    fn trial_cannot_use_pro_features() {
        let sub = subscription_on(PlanTier::Trial);
        let result =
            FeatureGate::check_feature(Some(&sub), GatedFeature::AiBuyButton, Timestamp::now());
        assert_eq!(
            result,
            AccessResult::Denied(AccessDeniedReason::UpgradeRequired {
                feature: GatedFeature::AiBuyButton,
                current: PlanTier::Trial,
                required: PlanTier::Pro,
            })
        );
        assert_eq!(result.upgrade_target(), Some(PlanTier::Pro));
    }

    #[test]
    fn enterprise_can_use_everything() {
        let sub = subscription_on(PlanTier::Enterprise);
        for feature in GatedFeature::ALL {
            assert!(
                FeatureGate::check_feature(Some(&sub), feature, Timestamp::now()).is_allowed(),
                "{:?} should be allowed",
                feature
            );
        }
    }

    #[test]
    fn access_matches_tier_ordering_for_every_feature() {
        for plan in PlanTier::ALL {
            let sub = subscription_on(plan);
            for feature in GatedFeature::ALL {
                let allowed =
                    FeatureGate::check_feature(Some(&sub), feature, Timestamp::now()).is_allowed();
                assert_eq!(allowed, plan.rank() >= feature.required_tier().rank());
            }
        }
    }

    #[test]
    fn expired_trial_is_denied_even_trial_features() {
        let now = Timestamp::now();
        let sub = Subscription::start_trial_at(UserId::new("user-1").unwrap(), 14, now);
        let later = now.add_days(20);
        let result = FeatureGate::check_feature(Some(&sub), GatedFeature::SeoTools, later);
        assert_eq!(result, AccessResult::Denied(AccessDeniedReason::TrialExpired));
    }

    #[test]
    fn cancelled_subscription_is_denied() {
        let mut sub = subscription_on(PlanTier::Pro);
        sub.cancel().unwrap();
        let result = FeatureGate::check_feature(Some(&sub), GatedFeature::SeoTools, Timestamp::now());
        assert_eq!(
            result,
            AccessResult::Denied(AccessDeniedReason::SubscriptionInactive {
                status: SubscriptionStatus::Cancelled
            })
        );
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Limit checks
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn under_limit_is_allowed() {
        let sub = subscription_on(PlanTier::Starter);
        let result = FeatureGate::check_limit(
            Some(&sub),
            LimitedResource::TrackedKeywords,
            99,
            Timestamp::now(),
        );
        assert!(result.is_allowed());
    }

    #[test]
    fn at_limit_is_denied_with_next_plan() {
        let sub = subscription_on(PlanTier::Starter);
        let result = FeatureGate::check_limit(
            Some(&sub),
            LimitedResource::TrackedKeywords,
            100,
            Timestamp::now(),
        );
        assert_eq!(
            result,
            AccessResult::Denied(AccessDeniedReason::LimitReached {
                resource: LimitedResource::TrackedKeywords,
                current: 100,
                max: 100,
                next_plan: Some(PlanTier::Pro),
            })
        );
        assert_eq!(result.upgrade_target(), Some(PlanTier::Pro));
    }

    #[test]
    fn enterprise_has_no_limits() {
        let sub = subscription_on(PlanTier::Enterprise);
        let result =
            FeatureGate::check_limit(Some(&sub), LimitedResource::Clients, 10_000, Timestamp::now());
        assert!(result.is_allowed());
    }

    #[test]
    fn limit_check_without_subscription_is_denied() {
        let result = FeatureGate::check_limit(None, LimitedResource::Pages, 0, Timestamp::now());
        assert!(result.is_denied());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Messages and serialization
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn upgrade_message_names_feature_and_plan() {
        let reason = AccessDeniedReason::UpgradeRequired {
            feature: GatedFeature::WhiteLabel,
            current: PlanTier::Pro,
            required: PlanTier::Enterprise,
        };
        let msg = reason.user_message();
        assert!(msg.contains("White label reports"));
        assert!(msg.contains("Enterprise"));
    }

    #[test]
    fn limit_message_shows_counts() {
        let reason = AccessDeniedReason::LimitReached {
            resource: LimitedResource::Reports,
            current: 10,
            max: 10,
            next_plan: Some(PlanTier::Pro),
        };
        let msg = reason.to_string();
        assert!(msg.contains("10 reports"));
        assert!(msg.contains("currently 10"));
    }

    #[test]
    fn into_result_denied_is_err() {
        let result = AccessResult::Denied(AccessDeniedReason::TrialExpired);
        assert_eq!(result.into_result(), Err(AccessDeniedReason::TrialExpired));
    }

    #[test]
    fn denied_reason_serializes_with_type_tag() {
        let reason = AccessDeniedReason::UpgradeRequired {
            feature: GatedFeature::ApiAccess,
            current: PlanTier::Starter,
            required: PlanTier::Enterprise,
        };
        let json = serde_json::to_string(&reason).unwrap();
        assert!(json.contains("\"type\":\"upgrade_required\""));
        assert!(json.contains("\"feature\":\"api_access\""));
        assert!(json.contains("\"required\":\"enterprise\""));
    }
}
