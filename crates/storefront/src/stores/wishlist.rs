//! Wishlist store.
//!
//! Boolean membership over products: an item is either favorited or
//! not, with no quantity. Same ownership and persistence lifecycle as
//! the cart, on its own slot.

use keepanime_core::ProductId;

use super::slot::SlotBridge;
use super::Notice;
use crate::models::ProductSummary;

/// Slot holding the serialized wishlist.
pub const WISHLIST_SLOT: &str = "keepanime_wishlist_v1";

/// The wishlist of one client profile.
pub struct WishlistStore {
    items: Vec<ProductSummary>,
    bridge: SlotBridge,
}

impl WishlistStore {
    /// Open the wishlist, rehydrating from its slot.
    #[must_use]
    pub fn open(bridge: SlotBridge) -> Self {
        let items = bridge.load(WISHLIST_SLOT);
        Self { items, bridge }
    }

    /// Toggle membership: remove the item when present, add it
    /// otherwise. The notice says which branch ran.
    pub fn toggle(&mut self, item: ProductSummary) -> Notice {
        let notice = if self.has(item.id) {
            self.items.retain(|i| i.id != item.id);
            Notice::RemovedFromWishlist
        } else {
            self.items.push(item);
            Notice::AddedToWishlist
        };
        self.persist();
        notice
    }

    /// Whether a product is favorited.
    #[must_use]
    pub fn has(&self, id: ProductId) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    /// Favorited items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ProductSummary] {
        &self.items
    }

    /// Number of favorited products.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    fn persist(&self) {
        self.bridge.save(WISHLIST_SLOT, &self.items);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use keepanime_core::Price;

    use super::*;

    fn summary(id: ProductId, name: &str) -> ProductSummary {
        ProductSummary {
            id,
            name: name.to_owned(),
            price: Price::from_cents(4999),
            image: None,
            storage: None,
            collection: None,
        }
    }

    fn wishlist() -> WishlistStore {
        WishlistStore::open(SlotBridge::new(PathBuf::from("/dev/null/none")))
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = wishlist();
        let id = ProductId::new();

        assert_eq!(wishlist.toggle(summary(id, "Luffy Drive")), Notice::AddedToWishlist);
        assert!(wishlist.has(id));
        assert_eq!(wishlist.count(), 1);

        assert_eq!(
            wishlist.toggle(summary(id, "Luffy Drive")),
            Notice::RemovedFromWishlist
        );
        assert!(!wishlist.has(id));
        assert_eq!(wishlist.count(), 0);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut wishlist = wishlist();
        let keep = ProductId::new();
        let flip = ProductId::new();
        wishlist.toggle(summary(keep, "Keeper"));

        wishlist.toggle(summary(flip, "Flipper"));
        wishlist.toggle(summary(flip, "Flipper"));

        assert!(wishlist.has(keep));
        assert!(!wishlist.has(flip));
        assert_eq!(wishlist.count(), 1);
    }

    #[test]
    fn test_count_is_distinct_membership() {
        let mut wishlist = wishlist();
        let a = ProductId::new();
        let b = ProductId::new();

        wishlist.toggle(summary(a, "A"));
        wishlist.toggle(summary(b, "B"));
        assert_eq!(wishlist.count(), 2);
    }

    #[test]
    fn test_round_trip_through_slot() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = SlotBridge::new(dir.path().to_path_buf());
        let id = ProductId::new();

        let mut wishlist = WishlistStore::open(bridge.clone());
        wishlist.toggle(summary(id, "Luffy Drive"));

        let reopened = WishlistStore::open(bridge);
        assert!(reopened.has(id));
        assert_eq!(reopened.items(), wishlist.items());
    }
}
