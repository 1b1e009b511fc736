//! Plan domain module.
//!
//! Subscription tiers, the static plan catalog, promo codes and the
//! string-keyed evaluator used by feature gates and billing screens.
//!
//! # Module Structure
//!
//! - `tier` - PlanTier ordering
//! - `limits` - Per-plan resource caps
//! - `catalog` - Static plan definitions (prices, features, limits)
//! - `promo_code` - Fixed promo code table and discount arithmetic
//! - `pricing` - Pricing summaries for billing screens
//! - `evaluator` - Total, string-keyed access and pricing helpers

mod catalog;
pub mod evaluator;
mod limits;
mod pricing;
mod promo_code;
mod tier;

pub use catalog::{BillingCycle, Plan};
pub use evaluator::{
    apply_promo_code, calculate_yearly_savings, can_upgrade, get_next_plan, get_plan_features,
    has_access, validate_promo_code,
};
pub use limits::{Limit, LimitedResource, PlanLimits};
pub use pricing::{quote, PricingSummary};
pub use promo_code::{Discount, PromoCode};
pub use tier::PlanTier;
