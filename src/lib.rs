//! B3ACON - plan access control for the agency dashboard
//!
//! Decides which subscription plan a user is on, what that plan unlocks,
//! what the next tier up is, and how much the yearly billing cycle and
//! promo codes knock off the price.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
