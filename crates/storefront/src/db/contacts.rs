//! Contact-message repository.
//!
//! Anyone can submit a message; listing and status changes are
//! admin only.

use chrono::Utc;

use keepanime_core::{ContactId, ContactStatus, Email, UserId};

use super::users::UserRepository;
use super::{Database, RepositoryError};
use crate::models::ContactMessage;

/// Repository for contact-form submissions.
pub struct ContactRepository<'a> {
    db: &'a Database,
}

impl<'a> ContactRepository<'a> {
    /// Create a new contact repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Record a contact-form submission. Open to any caller; the
    /// message starts in the `new` status.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a malformed email or empty name,
    /// subject, or message.
    pub fn create(
        &self,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<ContactMessage, RepositoryError> {
        let email =
            Email::parse(email).map_err(|e| RepositoryError::Validation(e.to_string()))?;
        validate_text("name", name)?;
        validate_text("subject", subject)?;
        validate_text("message", message)?;

        let contact = ContactMessage {
            id: ContactId::new(),
            name: name.trim().to_owned(),
            email,
            subject: subject.trim().to_owned(),
            message: message.trim().to_owned(),
            status: ContactStatus::New,
            created_at: Utc::now(),
        };
        self.db.contacts_mut().push(contact.clone());
        Ok(contact)
    }

    /// List messages newest first. Admin only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` for non-admin callers.
    pub fn list(&self, caller: Option<UserId>) -> Result<Vec<ContactMessage>, RepositoryError> {
        UserRepository::new(self.db).require_admin(caller)?;
        Ok(self.db.contacts().iter().rev().cloned().collect())
    }

    /// Move a message to a new triage status. Admin only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` for non-admin callers and `NotFound` for
    /// a missing ID.
    pub fn update_status(
        &self,
        caller: Option<UserId>,
        id: ContactId,
        status: ContactStatus,
    ) -> Result<ContactMessage, RepositoryError> {
        UserRepository::new(self.db).require_admin(caller)?;

        let mut contacts = self.db.contacts_mut();
        let contact = contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;
        contact.status = status;
        Ok(contact.clone())
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), RepositoryError> {
    if value.trim().is_empty() {
        return Err(RepositoryError::Validation(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(())
}
