//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Apply promo codes in pricing summaries
    #[serde(default = "enabled")]
    pub enable_promo_codes: bool,

    /// Allow one-click demo sessions
    #[serde(default = "enabled")]
    pub enable_demo_login: bool,
}

fn enabled() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_promo_codes: true,
            enable_demo_login: true,
        }
    }
}
