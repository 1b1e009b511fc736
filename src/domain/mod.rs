//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `plan` - Plan tiers, catalog, promo codes and the access evaluator
//! - `subscription` - Subscription lifecycle and feature gating
//! - `account` - User profiles and sessions

pub mod account;
pub mod foundation;
pub mod plan;
pub mod subscription;
