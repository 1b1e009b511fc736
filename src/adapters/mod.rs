//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Session stores (in-memory, file)
//! - `membership` - Session-backed access checker

pub mod membership;
pub mod storage;

pub use membership::SessionAccessChecker;
pub use storage::{session_store_at, FileSessionStore, InMemorySessionStore};
