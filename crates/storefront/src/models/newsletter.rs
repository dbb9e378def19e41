//! Newsletter subscription domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use keepanime_core::{Email, SubscriptionId};

/// A newsletter subscription.
///
/// At most one subscription exists per (normalized) email address; the
/// store enforces this atomically at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique subscription ID.
    pub id: SubscriptionId,
    /// Subscriber's email address.
    pub email: Email,
    /// Where the signup came from ("homepage", "product", "launch", ...).
    pub source: String,
    /// When the subscription was created.
    pub subscribed_at: DateTime<Utc>,
}
