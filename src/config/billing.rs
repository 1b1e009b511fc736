//! Billing configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Trial length, currency and session persistence.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Length of the free trial assigned at signup
    #[serde(default = "default_trial_days")]
    pub trial_days: u32,

    /// ISO 4217 currency code prices are quoted in
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Directory for file-backed sessions. In-memory when unset.
    pub session_dir: Option<String>,
}

fn default_trial_days() -> u32 {
    14
}

fn default_currency() -> String {
    "usd".to_string()
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            trial_days: default_trial_days(),
            currency: default_currency(),
            session_dir: None,
        }
    }
}

impl BillingConfig {
    /// Validate billing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=90).contains(&self.trial_days) {
            return Err(ValidationError::InvalidTrialDays(self.trial_days));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCurrency(self.currency.clone()));
        }
        if matches!(&self.session_dir, Some(dir) if dir.trim().is_empty()) {
            return Err(ValidationError::EmptySessionDir);
        }
        Ok(())
    }
}
