//! Subscription domain module.
//!
//! Handles the per-user subscription lifecycle and feature gating.
//!
//! # Module Structure
//!
//! - `aggregate` - Subscription aggregate entity
//! - `status` - SubscriptionStatus state machine
//! - `gate` - Gated features and access decisions
//! - `errors` - SubscriptionError

mod aggregate;
mod errors;
mod gate;
mod status;

pub use aggregate::{PlanChange, Subscription};
pub use errors::SubscriptionError;
pub use gate::{AccessDeniedReason, AccessResult, FeatureGate, GatedFeature};
pub use status::SubscriptionStatus;
