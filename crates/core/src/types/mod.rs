//! Shared domain types for KeepAnime.

pub mod email;
pub mod id;
pub mod price;
pub mod role;
pub mod sort;
pub mod status;

pub use email::{Email, EmailError};
pub use id::{BlogPostId, ContactId, ProductId, SubscriptionId, UserId};
pub use price::{Price, PriceError};
pub use role::Role;
pub use sort::{SortKey, SortOrder};
pub use status::ContactStatus;
