//! User profile value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, ValidationError};

/// Which dashboard a user lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Agency staff managing many clients.
    #[default]
    Agency,
    /// A client of an agency, read-mostly.
    Client,
    /// A merchant using the Shopify app surface.
    ShopifyMerchant,
}

/// Signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}

impl UserProfile {
    /// Creates a profile, validating the email and display name.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if email or display name is blank
    /// - `InvalidFormat` if the email has no `@` with text on both sides
    pub fn try_new(
        id: UserId,
        email: impl Into<String>,
        display_name: impl Into<String>,
        role: UserRole,
    ) -> Result<Self, ValidationError> {
        let email = email.into().trim().to_lowercase();
        let display_name = display_name.into().trim().to_string();

        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => {
                return Err(ValidationError::invalid_format(
                    "email",
                    format!("'{}' is not an email address", email),
                ))
            }
        }
        if display_name.is_empty() {
            return Err(ValidationError::empty_field("display_name"));
        }

        Ok(Self {
            id,
            email,
            display_name,
            role,
        })
    }
}
