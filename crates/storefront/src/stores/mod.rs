//! Client-side state containers: cart and wishlist.
//!
//! These stores hold per-browser-profile state that never touches the
//! document store. Each one rehydrates from its own slot on open and
//! writes the slot back after every mutation; a failed write degrades
//! to in-memory-only operation without surfacing an error.
//!
//! Mutations return a [`Notice`] naming the confirmation the
//! presentation layer should show; the stores themselves never render
//! anything.

pub mod cart;
pub mod slot;
pub mod wishlist;

pub use cart::{CartItem, CartStore};
pub use slot::SlotBridge;
pub use wishlist::WishlistStore;

/// User-visible confirmation emitted by a store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    AddedToCart,
    RemovedFromCart,
    CartCleared,
    AddedToWishlist,
    RemovedFromWishlist,
}

impl Notice {
    /// The confirmation text shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::AddedToCart => "Added to cart",
            Self::RemovedFromCart => "Removed from cart",
            Self::CartCleared => "Cart cleared",
            Self::AddedToWishlist => "Added to wishlist",
            Self::RemovedFromWishlist => "Removed from wishlist",
        }
    }
}
