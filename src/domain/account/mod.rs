//! Account domain module.
//!
//! Who is signed in and with which subscription.

mod profile;
mod session;

pub use profile::{UserProfile, UserRole};
pub use session::{SessionOrigin, UserSession};
