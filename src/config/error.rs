//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Trial length must be between 1 and 90 days, got {0}")]
    InvalidTrialDays(u32),

    #[error("Currency must be a three-letter ISO code, got '{0}'")]
    InvalidCurrency(String),

    #[error("Session directory must not be empty when set")]
    EmptySessionDir,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
