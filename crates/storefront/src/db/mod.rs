//! Data access layer over the document store.
//!
//! # Collections
//!
//! - `products` - The pendrive catalog (admin-managed)
//! - `blog` - Launch updates and announcements (admin-managed)
//! - `newsletter` - Subscriptions, unique per email
//! - `contacts` - Contact-form submissions with a triage status
//! - `users` - User records including role and profile fields
//!
//! Each collection has a repository type that validates arguments and,
//! for privileged writes, re-checks the caller's stored role on every
//! call. The store itself ([`store::Database`]) provides consistent
//! reads, atomic single-document mutations, and unique-index
//! enforcement under per-collection locks.

pub mod blog;
pub mod contacts;
pub mod newsletter;
pub mod products;
pub mod store;
pub mod users;

pub use blog::BlogRepository;
pub use contacts::ContactRepository;
pub use newsletter::NewsletterRepository;
pub use products::{ProductQuery, ProductRepository};
pub use store::Database;
pub use users::UserRepository;

use thiserror::Error;

/// Errors produced by the data access layer.
///
/// Queries for a missing document return `Option::None` rather than
/// `NotFound`; the error variant exists for mutations that target a
/// specific document.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Malformed or missing argument; rejected before any write.
    #[error("validation error: {0}")]
    Validation(String),

    /// Caller lacks the required role or is not authenticated.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A unique-index constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The targeted document does not exist.
    #[error("not found")]
    NotFound,
}
