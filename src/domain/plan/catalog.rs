//! Static plan catalog.
//!
//! # Catalog
//!
//! | Plan | Monthly | Yearly | Keywords | Pages | Reports | Clients |
//! |------|---------|--------|----------|-------|---------|---------|
//! | Trial | $0 | $0 | 10 | 5 | 2 | 1 |
//! | Starter | $29 | $290 | 100 | 25 | 10 | 5 |
//! | Pro | $79 | $790 | 500 | 100 | 50 | 25 |
//! | Enterprise | $199 | $1990 | Unlimited | Unlimited | Unlimited | Unlimited |
//!
//! Money is held in cents (`i64`), never floats.

use serde::{Deserialize, Serialize};

use super::{Limit, PlanLimits, PlanTier};

/// Billing cadence chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

/// One row of the plan catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub tier: PlanTier,
    pub name: &'static str,
    /// Monthly price in cents.
    pub monthly_price: i64,
    /// Yearly price in cents.
    pub yearly_price: i64,
    pub features: &'static [&'static str],
    pub limits: PlanLimits,
}

static TRIAL: Plan = Plan {
    tier: PlanTier::Trial,
    name: "Free Trial",
    monthly_price: 0,
    yearly_price: 0,
    features: &[
        "Basic SEO Tools",
        "10 Tracked Keywords",
        "Basic Reports",
        "Email Support",
    ],
    limits: PlanLimits {
        tracked_keywords: Limit::Capped(10),
        pages: Limit::Capped(5),
        reports: Limit::Capped(2),
        clients: Limit::Capped(1),
    },
};

static STARTER: Plan = Plan {
    tier: PlanTier::Starter,
    name: "Starter",
    monthly_price: 29_00,
    yearly_price: 290_00,
    features: &[
        "SEO Tools",
        "100 Tracked Keywords",
        "Social Media Management",
        "Review Manager",
        "Headline Generator",
        "Monthly Reports",
        "Email Support",
    ],
    limits: PlanLimits {
        tracked_keywords: Limit::Capped(100),
        pages: Limit::Capped(25),
        reports: Limit::Capped(10),
        clients: Limit::Capped(5),
    },
};

static PRO: Plan = Plan {
    tier: PlanTier::Pro,
    name: "Pro",
    monthly_price: 79_00,
    yearly_price: 790_00,
    features: &[
        "Advanced SEO Tools",
        "500 Tracked Keywords",
        "Social Media Management",
        "Review Manager",
        "Headline Generator",
        "PPC Management",
        "AI Buy Button Generator",
        "Shopify Integration",
        "Advanced Reports",
        "Priority Support",
    ],
    limits: PlanLimits {
        tracked_keywords: Limit::Capped(500),
        pages: Limit::Capped(100),
        reports: Limit::Capped(50),
        clients: Limit::Capped(25),
    },
};

static ENTERPRISE: Plan = Plan {
    tier: PlanTier::Enterprise,
    name: "Enterprise",
    monthly_price: 199_00,
    yearly_price: 1990_00,
    features: &[
        "Everything in Pro",
        "Unlimited Tracked Keywords",
        "White Label Reports",
        "API Access",
        "Custom Integrations",
        "Dedicated Account Manager",
    ],
    limits: PlanLimits::UNLIMITED,
};

impl Plan {
    /// Catalog entry for a tier.
    pub fn for_tier(tier: PlanTier) -> &'static Plan {
        match tier {
            PlanTier::Trial => &TRIAL,
            PlanTier::Starter => &STARTER,
            PlanTier::Pro => &PRO,
            PlanTier::Enterprise => &ENTERPRISE,
        }
    }

    /// Every plan, cheapest first.
    pub fn all() -> impl Iterator<Item = &'static Plan> {
        PlanTier::ALL.into_iter().map(Plan::for_tier)
    }

    /// Twelve monthly payments minus the yearly price, in cents.
    pub fn yearly_savings(&self) -> i64 {
        self.monthly_price * 12 - self.yearly_price
    }

    /// List price for a billing cycle, in cents.
    pub fn price_for(&self, cycle: BillingCycle) -> i64 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    /// Returns true if the feature name appears in this plan's list.
    pub fn includes_feature(&self, feature: &str) -> bool {
        self.features.contains(&feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_tier_returns_matching_plan() {
        for tier in PlanTier::ALL {
            assert_eq!(Plan::for_tier(tier).tier, tier);
        }
    }

    #[test]
    fn prices_never_decrease_up_the_ladder() {
        let plans: Vec<&Plan> = Plan::all().collect();
        for pair in plans.windows(2) {
            assert!(pair[0].monthly_price <= pair[1].monthly_price);
            assert!(pair[0].yearly_price <= pair[1].yearly_price);
        }
    }

    #[test]
    fn pro_yearly_savings_is_two_months() {
        assert_eq!(Plan::for_tier(PlanTier::Pro).yearly_savings(), 158_00);
    }

    #[test]
    fn trial_has_no_savings() {
        assert_eq!(Plan::for_tier(PlanTier::Trial).yearly_savings(), 0);
    }

    #[test]
    fn price_for_selects_cycle() {
        let starter = Plan::for_tier(PlanTier::Starter);
        assert_eq!(starter.price_for(BillingCycle::Monthly), 29_00);
        assert_eq!(starter.price_for(BillingCycle::Yearly), 290_00);
    }

    #[test]
    fn enterprise_is_unlimited() {
        assert_eq!(Plan::for_tier(PlanTier::Enterprise).limits, PlanLimits::UNLIMITED);
    }

    #[test]
    fn every_plan_lists_features() {
        for plan in Plan::all() {
            assert!(!plan.features.is_empty(), "{} has no features", plan.name);
        }
    }

    #[test]
    fn includes_feature_matches_exact_name() {
        let pro = Plan::for_tier(PlanTier::Pro);
        assert!(pro.includes_feature("Shopify Integration"));
        assert!(!pro.includes_feature("shopify integration"));
    }

    #[test]
    fn billing_cycle_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BillingCycle::Yearly).unwrap(),
            "\"yearly\""
        );
    }
}
