//! User domain types.
//!
//! The user record is a single explicit struct with every optional
//! profile field declared up front; nothing is accessed by casting a
//! loose shape at the call site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use keepanime_core::{Email, Role, UserId};

/// A storefront user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: Option<String>,
    /// Avatar image URL.
    pub image: Option<String>,
    /// Email address used for sign-in.
    pub email: Option<Email>,
    /// Role; absence means non-privileged.
    pub role: Option<Role>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Shipping address.
    pub address: Option<String>,
    /// Preferred payment method label.
    pub payment_method: Option<String>,
    /// Whether the user wants email notifications.
    pub notifications: Option<bool>,
    /// When the user record was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this user holds the administrator role.
    ///
    /// A missing role is non-privileged.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.is_some_and(Role::is_admin)
    }
}

/// Partial update for the self-service profile fields.
///
/// Only the provided fields are applied; an all-`None` update is a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    pub phone: Option<String>,
    pub address: Option<String>,
    pub payment_method: Option<String>,
    pub notifications: Option<bool>,
}

impl PreferencesUpdate {
    /// Whether the update carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.phone.is_none()
            && self.address.is_none()
            && self.payment_method.is_none()
            && self.notifications.is_none()
    }
}
