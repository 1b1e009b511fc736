//! File-based Session Store Adapter
//!
//! Stores each user's session as a JSON document under a base directory.
//! Filenames percent-encode every byte of the user id outside
//! `[A-Za-z0-9_-]`, so distinct ids never share a file.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::account::UserSession;
use crate::domain::foundation::UserId;
use crate::ports::{SessionStore, SessionStoreError};

/// File-based session store.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_path: PathBuf,
}

impl FileSessionStore {
    /// Create a store rooted at `base_path`. The directory is created on
    /// first save.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn session_path(&self, user_id: &UserId) -> PathBuf {
        let mut name = String::with_capacity(user_id.as_str().len() + 5);
        for byte in user_id.as_str().bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                name.push(char::from(byte));
            } else {
                name.push_str(&format!("%{:02X}", byte));
            }
        }
        name.push_str(".json");
        self.base_path.join(name)
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self, user_id: &UserId) -> Result<Option<UserSession>, SessionStoreError> {
        let json = match fs::read_to_string(self.session_path(user_id)).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionStoreError::IoError(e.to_string())),
        };

        let session = serde_json::from_str(&json)
            .map_err(|e| SessionStoreError::DeserializationFailed(e.to_string()))?;

        Ok(Some(session))
    }

    async fn save(&self, session: &UserSession) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        let json = serde_json::to_string_pretty(session)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;

        // Write then rename so readers never see a half-written file
        let path = self.session_path(session.user_id());
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn clear(&self, user_id: &UserId) -> Result<bool, SessionStoreError> {
        match fs::remove_file(self.session_path(user_id)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(SessionStoreError::IoError(e.to_string())),
        }
    }
}
