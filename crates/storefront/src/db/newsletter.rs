//! Newsletter repository.
//!
//! Subscription is open to any caller. The unique-email invariant is
//! enforced atomically: the existence check and the insert happen under
//! the same write lock, so two concurrent subscriptions for one email
//! can never both land. The check is an early exit, not the guarantee.

use chrono::Utc;

use keepanime_core::{Email, SubscriptionId};

use super::{Database, RepositoryError};
use crate::models::Subscription;

/// Source recorded when the caller does not say where the signup
/// came from.
const DEFAULT_SOURCE: &str = "website";

/// Repository for newsletter subscriptions.
pub struct NewsletterRepository<'a> {
    db: &'a Database,
}

impl<'a> NewsletterRepository<'a> {
    /// Create a new newsletter repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Subscribe an email address.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a malformed email and `Conflict` when
    /// the (normalized) email is already subscribed.
    pub fn subscribe(
        &self,
        email: &str,
        source: Option<&str>,
    ) -> Result<Subscription, RepositoryError> {
        let email =
            Email::parse(email).map_err(|e| RepositoryError::Validation(e.to_string()))?;

        let mut subscriptions = self.db.newsletter_mut();
        if subscriptions.iter().any(|s| s.email == email) {
            return Err(RepositoryError::Conflict(
                "email already subscribed".to_owned(),
            ));
        }

        let subscription = Subscription {
            id: SubscriptionId::new(),
            email,
            source: source.unwrap_or(DEFAULT_SOURCE).to_owned(),
            subscribed_at: Utc::now(),
        };
        subscriptions.push(subscription.clone());
        Ok(subscription)
    }

    /// List subscriptions newest first.
    #[must_use]
    pub fn list(&self) -> Vec<Subscription> {
        self.db.newsletter().iter().rev().cloned().collect()
    }

    /// Number of subscriptions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.db.newsletter().len()
    }
}
