//! Membership adapters - implementations of access-related ports.
//!
//! - `SessionAccessChecker` - Gates features using the stored session

mod session_access_checker;

pub use session_access_checker::SessionAccessChecker;
