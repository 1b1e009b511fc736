//! StartSessionHandler - Command handler for signup and demo login.

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::domain::account::{SessionOrigin, UserProfile, UserRole, UserSession};
use crate::domain::foundation::UserId;
use crate::domain::subscription::SubscriptionError;
use crate::ports::SessionStore;

/// Command to sign a user in on a fresh trial.
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    pub user_id: UserId,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub origin: SessionOrigin,
}

/// Result of a successful sign-in.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session: UserSession,
    /// True when a demo login overwrote an earlier session.
    pub replaced_existing: bool,
}

/// Handler for starting sessions.
///
/// Signup refuses to overwrite an existing session. Demo login always
/// starts over on a new trial, and is refused when the flag is off.
pub struct StartSessionHandler {
    store: Arc<dyn SessionStore>,
    trial_days: u32,
    demo_login_enabled: bool,
}

impl StartSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, trial_days: u32, demo_login_enabled: bool) -> Self {
        Self {
            store,
            trial_days,
            demo_login_enabled,
        }
    }

    pub fn from_config(store: Arc<dyn SessionStore>, config: &AppConfig) -> Self {
        Self::new(
            store,
            config.billing.trial_days,
            config.features.enable_demo_login,
        )
    }

    pub async fn handle(
        &self,
        cmd: StartSessionCommand,
    ) -> Result<StartSessionResult, SubscriptionError> {
        if cmd.origin == SessionOrigin::Demo && !self.demo_login_enabled {
            return Err(SubscriptionError::DemoLoginDisabled);
        }

        // 1. Validate the profile before touching storage
        let profile = UserProfile::try_new(cmd.user_id, &cmd.email, &cmd.display_name, cmd.role)?;

        // 2. Check for an existing session
        let existing = self
            .store
            .load(&profile.id)
            .await
            .map_err(|e| SubscriptionError::storage(e.to_string()))?;

        if existing.is_some() && cmd.origin == SessionOrigin::Signup {
            return Err(SubscriptionError::SessionExists(profile.id));
        }

        // 3. Persist the new session
        let session = UserSession::start(profile, cmd.origin, self.trial_days);
        self.store
            .save(&session)
            .await
            .map_err(|e| SubscriptionError::storage(e.to_string()))?;

        info!(
            user_id = %session.user_id(),
            origin = ?session.origin,
            trial_days = self.trial_days,
            "Session started"
        );

        Ok(StartSessionResult {
            session,
            replaced_existing: existing.is_some(),
        })
    }
}
