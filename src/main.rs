//! Prints the plan catalog with monthly and yearly pricing as JSON.
//!
//! With a user id argument, also prints that user's access to every gated
//! feature, read from the configured session store.

use std::error::Error;
use std::sync::Arc;

use serde_json::json;
use tracing::info;

use b3acon::adapters::{session_store_at, SessionAccessChecker};
use b3acon::application::{
    CheckFeatureAccessHandler, CheckFeatureAccessQuery, GetPricingSummaryHandler,
    GetPricingSummaryQuery,
};
use b3acon::config::AppConfig;
use b3acon::domain::foundation::UserId;
use b3acon::domain::plan::{BillingCycle, PlanTier};
use b3acon::domain::subscription::GatedFeature;
use b3acon::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let session_dir = config.billing.session_dir.as_deref();
    info!(
        environment = ?config.environment,
        currency = %config.billing.currency,
        trial_days = config.billing.trial_days,
        session_dir = session_dir.unwrap_or("<memory>"),
        "Configuration loaded"
    );

    let pricing = GetPricingSummaryHandler::new(config.features.enable_promo_codes);
    let mut table = Vec::with_capacity(PlanTier::ALL.len() * 2);
    for tier in PlanTier::ALL {
        for cycle in [BillingCycle::Monthly, BillingCycle::Yearly] {
            table.push(pricing.handle(GetPricingSummaryQuery {
                plan: tier.as_str().to_string(),
                cycle,
                promo_code: None,
            })?);
        }
    }
    println!("{}", serde_json::to_string_pretty(&table)?);

    if let Some(user) = std::env::args().nth(1) {
        let user_id = UserId::new(user)?;
        let store = session_store_at(session_dir);
        let access = CheckFeatureAccessHandler::new(Arc::new(SessionAccessChecker::new(store)));

        let mut report = Vec::with_capacity(GatedFeature::ALL.len());
        for feature in GatedFeature::ALL {
            let result = access
                .handle(CheckFeatureAccessQuery {
                    user_id: user_id.clone(),
                    feature,
                })
                .await;
            report.push(json!({
                "feature": feature,
                "access": result.access,
                "upgrade_to": result.upgrade_to,
            }));
        }
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
