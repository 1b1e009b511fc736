//! Subscription-specific error types.
//!
//! | Error | Code |
//! |-------|------|
//! | InvalidPlan | INVALID_PLAN |
//! | InvalidPlanChange | VALIDATION_FAILED |
//! | InvalidState | INVALID_STATE_TRANSITION |
//! | SessionNotFound | SESSION_NOT_FOUND |
//! | SessionExists | SESSION_EXISTS |
//! | DemoLoginDisabled | FORBIDDEN |
//! | Validation | VALIDATION_FAILED |
//! | Storage | STORAGE_ERROR |

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, UserId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    #[error("Invalid plan: {0}")]
    InvalidPlan(String),

    #[error("Cannot change plan: {0}")]
    InvalidPlanChange(String),

    #[error("Cannot {attempted} a subscription in {current} state")]
    InvalidState { current: String, attempted: String },

    #[error("No session found for user: {0}")]
    SessionNotFound(UserId),

    #[error("User {0} already has an active session")]
    SessionExists(UserId),

    #[error("Demo login is disabled")]
    DemoLoginDisabled,

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl SubscriptionError {
    pub fn invalid_plan(plan: impl Into<String>) -> Self {
        SubscriptionError::InvalidPlan(plan.into())
    }

    pub fn invalid_plan_change(reason: impl Into<String>) -> Self {
        SubscriptionError::InvalidPlanChange(reason.into())
    }

    pub fn invalid_state(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        SubscriptionError::InvalidState {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        SubscriptionError::Storage(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::InvalidPlan(_) => ErrorCode::InvalidPlan,
            SubscriptionError::InvalidPlanChange(_) | SubscriptionError::Validation(_) => {
                ErrorCode::ValidationFailed
            }
            SubscriptionError::InvalidState { .. } => ErrorCode::InvalidStateTransition,
            SubscriptionError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            SubscriptionError::SessionExists(_) => ErrorCode::SessionExists,
            SubscriptionError::DemoLoginDisabled => ErrorCode::Forbidden,
            SubscriptionError::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// Returns true if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubscriptionError::Storage(_))
    }
}
