//! User repository.
//!
//! Self-service profile mutations require the caller to be the
//! authenticated owner; there is no way to edit another user's record.
//! The `require_admin` check used by the other repositories also lives
//! here: it reloads the caller's record on every call, so a role change
//! takes effect immediately.

use chrono::Utc;

use keepanime_core::{Email, UserId};

use super::{Database, RepositoryError};
use crate::models::{PreferencesUpdate, User};

/// Repository for user records.
pub struct UserRepository<'a> {
    db: &'a Database,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Get the signed-in user's record, or `None` when signed out or
    /// when the session references a deleted user.
    #[must_use]
    pub fn current_user(&self, caller: Option<UserId>) -> Option<User> {
        let id = caller?;
        self.get_by_id(id)
    }

    /// Get a user by ID.
    #[must_use]
    pub fn get_by_id(&self, id: UserId) -> Option<User> {
        self.db.users().iter().find(|u| u.id == id).cloned()
    }

    /// Find a user by email, creating an unprivileged record if absent.
    ///
    /// Email uniqueness is enforced under the collection's write lock.
    pub fn find_or_create(&self, email: &Email) -> User {
        let mut users = self.db.users_mut();
        if let Some(user) = users
            .iter()
            .find(|u| u.email.as_ref() == Some(email))
        {
            return user.clone();
        }

        let user = User {
            id: UserId::new(),
            name: None,
            image: None,
            email: Some(email.clone()),
            role: None,
            phone: None,
            address: None,
            payment_method: None,
            notifications: None,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        user
    }

    /// Set the caller's display name.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when signed out, `Validation` for an
    /// empty name.
    pub fn set_name(&self, caller: Option<UserId>, name: &str) -> Result<(), RepositoryError> {
        let id = require_authenticated(caller)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(RepositoryError::Validation("name cannot be empty".to_owned()));
        }

        self.patch(id, |user| user.name = Some(name.to_owned()))
    }

    /// Set the caller's avatar image URL.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when signed out.
    pub fn set_image(&self, caller: Option<UserId>, image: &str) -> Result<(), RepositoryError> {
        let id = require_authenticated(caller)?;
        self.patch(id, |user| user.image = Some(image.to_owned()))
    }

    /// Apply the provided profile preference fields to the caller's
    /// record. An empty update is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when signed out.
    pub fn update_preferences(
        &self,
        caller: Option<UserId>,
        update: PreferencesUpdate,
    ) -> Result<(), RepositoryError> {
        let id = require_authenticated(caller)?;
        if update.is_empty() {
            return Ok(());
        }

        self.patch(id, |user| {
            if let Some(phone) = update.phone {
                user.phone = Some(phone);
            }
            if let Some(address) = update.address {
                user.address = Some(address);
            }
            if let Some(payment_method) = update.payment_method {
                user.payment_method = Some(payment_method);
            }
            if let Some(notifications) = update.notifications {
                user.notifications = Some(notifications);
            }
        })
    }

    /// Load the caller's record and require the administrator role.
    ///
    /// Re-evaluated on every call; authorization decisions are never
    /// cached.
    pub(crate) fn require_admin(&self, caller: Option<UserId>) -> Result<User, RepositoryError> {
        let id = require_authenticated(caller)?;
        let user = self
            .get_by_id(id)
            .ok_or_else(|| RepositoryError::Unauthorized("unknown user".to_owned()))?;
        if !user.is_admin() {
            return Err(RepositoryError::Unauthorized(
                "admin role required".to_owned(),
            ));
        }
        Ok(user)
    }

    fn patch(
        &self,
        id: UserId,
        apply: impl FnOnce(&mut User),
    ) -> Result<(), RepositoryError> {
        let mut users = self.db.users_mut();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::NotFound)?;
        apply(user);
        Ok(())
    }
}

fn require_authenticated(caller: Option<UserId>) -> Result<UserId, RepositoryError> {
    caller.ok_or_else(|| RepositoryError::Unauthorized("not authenticated".to_owned()))
}
