//! Subscription command and query handlers.
//!
//! Each handler owns its ports as `Arc<dyn Port>` so callers can inject
//! an in-memory store in tests and a file store in the binary.

mod cancel_subscription;
mod change_plan;
mod check_feature_access;
mod end_session;
mod get_pricing_summary;
mod start_session;

pub use cancel_subscription::{
    CancelSubscriptionCommand, CancelSubscriptionHandler, CancelSubscriptionResult,
};
pub use change_plan::{ChangePlanCommand, ChangePlanHandler, ChangePlanResult};
pub use check_feature_access::{
    CheckFeatureAccessHandler, CheckFeatureAccessQuery, CheckFeatureAccessResult,
};
pub use end_session::{EndSessionCommand, EndSessionHandler, EndSessionResult};
pub use get_pricing_summary::{GetPricingSummaryHandler, GetPricingSummaryQuery};
pub use start_session::{StartSessionCommand, StartSessionHandler, StartSessionResult};
