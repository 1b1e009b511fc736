//! Storage Adapters
//!
//! Implementations of the SessionStore port.
//!
//! ## Available Adapters
//!
//! - **FileSessionStore** - One JSON document per user on disk
//! - **InMemorySessionStore** - Sessions in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::session_store_at;
//!
//! // File-backed when a directory is configured, in-memory otherwise
//! let store = session_store_at(config.billing.session_dir.as_deref());
//! ```

mod file_session_store;
mod in_memory_session_store;

pub use file_session_store::FileSessionStore;
pub use in_memory_session_store::InMemorySessionStore;

use std::sync::Arc;

use crate::ports::SessionStore;

/// Picks the session store backend.
///
/// `Some(dir)` stores one JSON file per user under `dir`; `None` keeps
/// sessions in memory for the life of the process.
pub fn session_store_at(session_dir: Option<&str>) -> Arc<dyn SessionStore> {
    match session_dir {
        Some(dir) => Arc::new(FileSessionStore::new(dir)),
        None => Arc::new(InMemorySessionStore::new()),
    }
}
