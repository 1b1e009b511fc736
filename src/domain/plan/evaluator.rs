//! String-keyed plan evaluator.
//!
//! Feature gates and billing screens hold plan ids as plain strings.
//! Every function here is total: unknown ids degrade to the lowest rank,
//! an empty feature list, zero savings, `None`, or an unchanged price.
//! Callers that need to reject bad ids should parse into [`PlanTier`].

use tracing::debug;

use super::{Discount, Plan, PlanTier, PromoCode};

fn rank(plan_id: &str) -> u8 {
    match PlanTier::from_id(plan_id) {
        Some(tier) => tier.rank(),
        None => {
            debug!(plan_id, "Unknown plan id, ranking as lowest tier");
            0
        }
    }
}

/// Returns true if `user_plan` ranks at or above `required_plan`.
///
/// Unknown ids rank as trial.
pub fn has_access(user_plan: &str, required_plan: &str) -> bool {
    rank(user_plan) >= rank(required_plan)
}

/// The plan immediately above `current_plan`.
///
/// `None` for the top tier and for unknown ids.
pub fn get_next_plan(current_plan: &str) -> Option<PlanTier> {
    PlanTier::from_id(current_plan).and_then(|tier| tier.next())
}

pub fn can_upgrade(current_plan: &str) -> bool {
    get_next_plan(current_plan).is_some()
}

/// Static feature list for a plan; empty for unknown ids.
pub fn get_plan_features(plan_id: &str) -> &'static [&'static str] {
    PlanTier::from_id(plan_id)
        .map(|tier| Plan::for_tier(tier).features)
        .unwrap_or(&[])
}

/// `monthly * 12 - yearly` in cents; zero for unknown ids.
pub fn calculate_yearly_savings(plan_id: &str) -> i64 {
    PlanTier::from_id(plan_id)
        .map(|tier| Plan::for_tier(tier).yearly_savings())
        .unwrap_or(0)
}

/// Case-insensitive promo code lookup.
pub fn validate_promo_code(code: &str) -> Option<Discount> {
    PromoCode::lookup(code).map(|promo| promo.discount())
}

/// Applies a promo code to a price in cents.
///
/// Invalid codes leave the price unchanged.
pub fn apply_promo_code(price: i64, code: &str) -> i64 {
    match validate_promo_code(code) {
        Some(discount) => discount.apply(price),
        None => {
            debug!(code, "Promo code not recognised, price unchanged");
            price
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLANS: [&str; 4] = ["trial", "starter", "pro", "enterprise"];

    // has_access

    #[test]
    fn has_access_is_reflexive() {
        for plan in PLANS {
            assert!(has_access(plan, plan), "{} should access itself", plan);
        }
    }

    #[test]
    fn has_access_is_monotonic() {
        for (i, lower) in PLANS.iter().enumerate() {
            for higher in &PLANS[i + 1..] {
                assert!(!has_access(lower, higher), "{} < {}", lower, higher);
                assert!(has_access(higher, lower), "{} > {}", higher, lower);
            }
        }
    }

    #[test]
    fn unknown_user_plan_fails_closed() {
        assert!(!has_access("bogus", "starter"));
    }

    #[test]
    fn unknown_user_plan_ranks_as_trial() {
        assert!(has_access("bogus", "trial"));
    }

    #[test]
    fn unknown_required_plan_ranks_as_trial() {
        assert!(has_access("trial", "bogus"));
    }

    #[test]
    fn plan_ids_are_case_sensitive() {
        assert!(!has_access("PRO", "starter"));
    }

    // get_next_plan / can_upgrade

    #[test]
    fn next_plan_walks_the_ladder() {
        assert_eq!(get_next_plan("trial"), Some(PlanTier::Starter));
        assert_eq!(get_next_plan("starter"), Some(PlanTier::Pro));
        assert_eq!(get_next_plan("pro"), Some(PlanTier::Enterprise));
    }

    #[test]
    fn enterprise_has_no_next_plan() {
        assert_eq!(get_next_plan("enterprise"), None);
        assert!(!can_upgrade("enterprise"));
    }

    #[test]
    fn unknown_plan_has_no_next_plan() {
        assert_eq!(get_next_plan("platinum"), None);
        assert!(!can_upgrade("platinum"));
    }

    #[test]
    fn lower_plans_can_upgrade() {
        assert!(can_upgrade("trial"));
        assert!(can_upgrade("pro"));
    }

    // get_plan_features

    #[test]
    fn unknown_plan_has_no_features() {
        assert!(get_plan_features("unknown-plan").is_empty());
    }

    #[test]
    fn known_plan_features_match_catalog() {
        assert_eq!(
            get_plan_features("pro"),
            Plan::for_tier(PlanTier::Pro).features
        );
    }

    // calculate_yearly_savings

    #[test]
    fn pro_savings_match_formula() {
        assert_eq!(calculate_yearly_savings("pro"), 79_00 * 12 - 790_00);
        assert_eq!(calculate_yearly_savings("pro"), 158_00);
    }

    #[test]
    fn unknown_plan_saves_nothing() {
        assert_eq!(calculate_yearly_savings("nope"), 0);
    }

    // promo codes

    #[test]
    fn validate_promo_code_ignores_case() {
        assert_eq!(validate_promo_code("save20"), validate_promo_code("SAVE20"));
        assert_eq!(validate_promo_code("SAVE20"), Some(Discount::Percentage(20)));
    }

    #[test]
    fn validate_promo_code_rejects_unknown() {
        assert_eq!(validate_promo_code("NOPE"), None);
    }

    #[test]
    fn apply_percentage_code() {
        assert_eq!(apply_promo_code(100_00, "SAVE20"), 80_00);
    }

    #[test]
    fn apply_fixed_code() {
        assert_eq!(apply_promo_code(100_00, "FIRST50"), 50_00);
    }

    #[test]
    fn apply_fixed_code_clamps_at_zero() {
        assert_eq!(apply_promo_code(10_00, "FIRST50"), 0);
    }

    #[test]
    fn apply_invalid_code_returns_price() {
        assert_eq!(apply_promo_code(100_00, "NOPE"), 100_00);
    }

    #[test]
    fn apply_is_total_on_extreme_prices() {
        assert_eq!(apply_promo_code(i64::MAX / 50, "SAVE20"), 147_573_952_589_676_413);
        assert_eq!(apply_promo_code(i64::MIN, "FIRST50"), 0);
        assert_eq!(apply_promo_code(i64::MIN, "welcome10"), 0);
        assert_eq!(apply_promo_code(i64::MAX, "NOPE"), i64::MAX);
    }
}
