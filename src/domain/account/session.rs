//! Signed-in session: a profile plus its subscription.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::subscription::Subscription;

use super::UserProfile;

/// How the session was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOrigin {
    Signup,
    /// One-click demo account. Replaces any previous demo session.
    Demo,
}

/// Persisted session state for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub user: UserProfile,
    pub subscription: Subscription,
    pub origin: SessionOrigin,
    pub started_at: Timestamp,
}

impl UserSession {
    /// New session on a fresh trial subscription.
    pub fn start(user: UserProfile, origin: SessionOrigin, trial_days: u32) -> Self {
        let subscription = Subscription::start_trial(user.id.clone(), trial_days);
        Self {
            user,
            subscription,
            origin,
            started_at: Timestamp::now(),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user.id
    }

    pub fn is_demo(&self) -> bool {
        self.origin == SessionOrigin::Demo
    }
}
