//! Domain models for the storefront document collections.
//!
//! These are the documents held by the in-process store plus the input
//! shapes accepted by the data access layer. All of them serialize with
//! serde for the JSON API and (for cart/wishlist items) the persisted
//! client-state slots.

pub mod blog;
pub mod contact;
pub mod newsletter;
pub mod product;
pub mod user;

pub use blog::{BlogPost, BlogPostPatch, NewBlogPost};
pub use contact::ContactMessage;
pub use newsletter::Subscription;
pub use product::{CollectionSummary, NewProduct, Product, ProductPatch, ProductSummary, Specifications};
pub use user::{PreferencesUpdate, User};

/// Session keys used by the storefront.
pub mod session_keys {
    /// The signed-in user's ID, set at login and cleared at logout.
    pub const CURRENT_USER: &str = "current_user";
    /// Per-session key naming the client-state profile directory that
    /// holds the cart and wishlist slots.
    pub const CLIENT_PROFILE: &str = "client_profile";
}
