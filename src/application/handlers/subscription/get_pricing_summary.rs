//! GetPricingSummaryHandler - Query handler for plan pricing.

use tracing::debug;

use crate::domain::plan::{quote, BillingCycle, PlanTier, PricingSummary};
use crate::domain::subscription::SubscriptionError;

/// Query for the price of a plan on a billing cycle.
#[derive(Debug, Clone)]
pub struct GetPricingSummaryQuery {
    /// Catalog identifier. Matched exactly.
    pub plan: String,
    pub cycle: BillingCycle,
    pub promo_code: Option<String>,
}

/// Handler for pricing summaries.
///
/// When promo codes are switched off the code in the query is ignored
/// and the list price is quoted.
pub struct GetPricingSummaryHandler {
    promo_codes_enabled: bool,
}

impl GetPricingSummaryHandler {
    pub fn new(promo_codes_enabled: bool) -> Self {
        Self {
            promo_codes_enabled,
        }
    }

    pub fn handle(&self, query: GetPricingSummaryQuery) -> Result<PricingSummary, SubscriptionError> {
        let tier: PlanTier = query
            .plan
            .parse()
            .map_err(|_| SubscriptionError::invalid_plan(query.plan.as_str()))?;

        let promo_code = match query.promo_code.as_deref() {
            Some(code) if !self.promo_codes_enabled => {
                debug!(code, "Promo codes disabled, ignoring code");
                None
            }
            other => other,
        };

        Ok(quote(tier, query.cycle, promo_code))
    }
}
