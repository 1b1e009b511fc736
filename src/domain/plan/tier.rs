//! Plan tier definitions.
//!
//! The four tiers form a strict total order:
//! trial < starter < pro < enterprise.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Subscription tier.
///
/// Determines gated feature access, resource limits and pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Assigned at signup and demo login. Time-boxed.
    Trial,
    /// Entry paid tier for small agencies.
    Starter,
    /// Adds PPC, Shopify and AI tooling.
    Pro,
    /// Everything, no resource caps.
    Enterprise,
}

impl PlanTier {
    /// All tiers in ascending order.
    pub const ALL: [PlanTier; 4] = [
        PlanTier::Trial,
        PlanTier::Starter,
        PlanTier::Pro,
        PlanTier::Enterprise,
    ];

    /// Numeric rank used for access comparisons.
    pub fn rank(&self) -> u8 {
        match self {
            PlanTier::Trial => 0,
            PlanTier::Starter => 1,
            PlanTier::Pro => 2,
            PlanTier::Enterprise => 3,
        }
    }

    /// The tier immediately above this one, if any.
    pub fn next(&self) -> Option<PlanTier> {
        match self {
            PlanTier::Trial => Some(PlanTier::Starter),
            PlanTier::Starter => Some(PlanTier::Pro),
            PlanTier::Pro => Some(PlanTier::Enterprise),
            PlanTier::Enterprise => None,
        }
    }

    /// Returns true if this tier meets or exceeds `required`.
    pub fn is_at_least(&self, required: PlanTier) -> bool {
        self.rank() >= required.rank()
    }

    /// Returns true for every tier except trial.
    pub fn is_paid(&self) -> bool {
        !matches!(self, PlanTier::Trial)
    }

    /// Catalog identifier (`"trial"`, `"starter"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Trial => "trial",
            PlanTier::Starter => "starter",
            PlanTier::Pro => "pro",
            PlanTier::Enterprise => "enterprise",
        }
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::Trial => "Free Trial",
            PlanTier::Starter => "Starter",
            PlanTier::Pro => "Pro",
            PlanTier::Enterprise => "Enterprise",
        }
    }

    /// Looks up a catalog identifier. Exact match only.
    pub fn from_id(id: &str) -> Option<PlanTier> {
        PlanTier::ALL.into_iter().find(|tier| tier.as_str() == id)
    }
}

impl FromStr for PlanTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::empty_field("plan"));
        }
        PlanTier::from_id(s)
            .ok_or_else(|| ValidationError::invalid_format("plan", format!("unknown plan '{}'", s)))
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
