//! Session store port.
//!
//! Replaces ad hoc reads and writes of browser storage with an explicit,
//! injectable store. Handlers receive an `Arc<dyn SessionStore>` and never
//! touch global state.

use async_trait::async_trait;

use crate::domain::account::UserSession;
use crate::domain::foundation::UserId;

/// Errors that can occur during session store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting user sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the session for a user, `None` if signed out.
    async fn load(&self, user_id: &UserId) -> Result<Option<UserSession>, SessionStoreError>;

    /// Insert or replace the session for `session.user.id`.
    async fn save(&self, session: &UserSession) -> Result<(), SessionStoreError>;

    /// Remove the session for a user.
    ///
    /// Returns true if a session existed.
    async fn clear(&self, user_id: &UserId) -> Result<bool, SessionStoreError>;
}
