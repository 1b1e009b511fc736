//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (start, change plan, cancel, end) write through the session store;
//! queries (feature access, pricing) only read.

pub mod handlers;

pub use handlers::subscription::{
    CancelSubscriptionCommand, CancelSubscriptionHandler, CancelSubscriptionResult,
    ChangePlanCommand, ChangePlanHandler, ChangePlanResult, CheckFeatureAccessHandler,
    CheckFeatureAccessQuery, CheckFeatureAccessResult, EndSessionCommand, EndSessionHandler,
    EndSessionResult, GetPricingSummaryHandler, GetPricingSummaryQuery, StartSessionCommand,
    StartSessionHandler, StartSessionResult,
};
