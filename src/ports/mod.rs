//! Ports - interfaces the application layer depends on.
//!
//! - `SessionStore` - persists signed-in sessions (profile + subscription)
//! - `AccessChecker` - answers feature and limit checks for a user

mod access_checker;
mod session_store;

pub use access_checker::AccessChecker;
pub use session_store::{SessionStore, SessionStoreError};
