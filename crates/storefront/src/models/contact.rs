//! Contact form domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use keepanime_core::{ContactId, ContactStatus, Email};

/// A contact-form submission.
///
/// Created by anyone; the status lifecycle (`new` → `read` → `replied`)
/// is driven by admins only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Unique message ID.
    pub id: ContactId,
    /// Sender's display name.
    pub name: String,
    /// Sender's email address.
    pub email: Email,
    /// Message subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Triage status.
    pub status: ContactStatus,
    /// When the message was submitted.
    pub created_at: DateTime<Utc>,
}
