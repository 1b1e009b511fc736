//! Per-plan resource limits.

use serde::{Deserialize, Serialize};

/// A cap on one resource. `Unlimited` never blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Limit {
    Capped(u32),
    Unlimited,
}

impl Limit {
    /// Returns true if `usage` has reached or passed the cap.
    pub fn is_reached(&self, usage: u32) -> bool {
        match self {
            Limit::Capped(max) => usage >= *max,
            Limit::Unlimited => false,
        }
    }

    /// Returns true if one more unit can be added on top of `usage`.
    pub fn allows(&self, usage: u32) -> bool {
        !self.is_reached(usage)
    }

    /// The numeric cap, `None` when unlimited.
    pub fn max(&self) -> Option<u32> {
        match self {
            Limit::Capped(max) => Some(*max),
            Limit::Unlimited => None,
        }
    }
}

/// Resources a plan caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitedResource {
    TrackedKeywords,
    Pages,
    Reports,
    Clients,
}

impl LimitedResource {
    pub fn display_name(&self) -> &'static str {
        match self {
            LimitedResource::TrackedKeywords => "tracked keywords",
            LimitedResource::Pages => "pages",
            LimitedResource::Reports => "reports",
            LimitedResource::Clients => "clients",
        }
    }
}

/// Resource caps for a single plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLimits {
    pub tracked_keywords: Limit,
    pub pages: Limit,
    pub reports: Limit,
    pub clients: Limit,
}

impl PlanLimits {
    /// Limits with no caps at all.
    pub const UNLIMITED: PlanLimits = PlanLimits {
        tracked_keywords: Limit::Unlimited,
        pages: Limit::Unlimited,
        reports: Limit::Unlimited,
        clients: Limit::Unlimited,
    };

    /// Returns the cap for a resource.
    pub fn get(&self, resource: LimitedResource) -> Limit {
        match resource {
            LimitedResource::TrackedKeywords => self.tracked_keywords,
            LimitedResource::Pages => self.pages,
            LimitedResource::Reports => self.reports,
            LimitedResource::Clients => self.clients,
        }
    }
}
