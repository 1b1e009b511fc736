//! Pricing summaries for plan-management screens.

use serde::Serialize;

use super::{BillingCycle, Discount, Plan, PlanTier, PromoCode};

/// Everything a billing screen renders for one plan and cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingSummary {
    pub plan: PlanTier,
    pub cycle: BillingCycle,
    /// Catalog price for the cycle, in cents.
    pub list_price: i64,
    /// Savings from paying yearly instead of monthly, in cents.
    pub yearly_savings: i64,
    /// Promo code that was applied, if it was recognised.
    pub promo_code: Option<PromoCode>,
    pub discount: Option<Discount>,
    /// Price after discount, in cents.
    pub total: i64,
    pub next_plan: Option<PlanTier>,
    pub can_upgrade: bool,
}

/// Builds a pricing summary.
///
/// An unrecognised promo code is ignored: no discount, list price charged.
pub fn quote(tier: PlanTier, cycle: BillingCycle, promo_code: Option<&str>) -> PricingSummary {
    let plan = Plan::for_tier(tier);
    let list_price = plan.price_for(cycle);
    let promo = promo_code.and_then(PromoCode::lookup);
    let discount = promo.map(|p| p.discount());
    let total = discount.map_or(list_price, |d| d.apply(list_price));
    let next_plan = tier.next();

    PricingSummary {
        plan: tier,
        cycle,
        list_price,
        yearly_savings: plan.yearly_savings(),
        promo_code: promo,
        discount,
        total,
        next_plan,
        can_upgrade: next_plan.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_without_promo_charges_list_price() {
        let summary = quote(PlanTier::Pro, BillingCycle::Monthly, None);
        assert_eq!(summary.list_price, 79_00);
        assert_eq!(summary.total, 79_00);
        assert_eq!(summary.discount, None);
        assert_eq!(summary.next_plan, Some(PlanTier::Enterprise));
        assert!(summary.can_upgrade);
    }

    #[test]
    fn quote_yearly_uses_yearly_price() {
        let summary = quote(PlanTier::Pro, BillingCycle::Yearly, None);
        assert_eq!(summary.list_price, 790_00);
        assert_eq!(summary.yearly_savings, 158_00);
    }

    #[test]
    fn quote_applies_known_promo_case_insensitively() {
        let summary = quote(PlanTier::Starter, BillingCycle::Yearly, Some("welcome10"));
        assert_eq!(summary.promo_code, Some(PromoCode::Welcome10));
        assert_eq!(summary.discount, Some(Discount::Percentage(10)));
        assert_eq!(summary.total, 261_00);
    }

    #[test]
    fn quote_ignores_unknown_promo() {
        let summary = quote(PlanTier::Starter, BillingCycle::Monthly, Some("BOGUS"));
        assert_eq!(summary.promo_code, None);
        assert_eq!(summary.total, 29_00);
    }

    #[test]
    fn quote_fixed_promo_clamps_cheap_plan() {
        let summary = quote(PlanTier::Starter, BillingCycle::Monthly, Some("FIRST50"));
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn enterprise_quote_cannot_upgrade() {
        let summary = quote(PlanTier::Enterprise, BillingCycle::Monthly, None);
        assert_eq!(summary.next_plan, None);
        assert!(!summary.can_upgrade);
    }
}
