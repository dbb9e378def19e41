//! Cart store.
//!
//! An ordered list of line items keyed by product ID, owned by exactly
//! one client profile. Mutations are synchronous: the in-memory list is
//! updated, the slot is written, and the caller gets a [`Notice`]. A
//! failed slot write never rolls back the in-memory change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use keepanime_core::{Price, ProductId};

use super::slot::SlotBridge;
use super::Notice;
use crate::models::ProductSummary;

/// Slot holding the serialized cart.
pub const CART_SLOT: &str = "keepanime_cart_v1";

/// Quantity bounds for a single line item.
const MIN_QUANTITY: u32 = 1;
const MAX_QUANTITY: u32 = 99;

/// A line item in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: Option<String>,
    pub storage: Option<String>,
    pub collection: Option<String>,
    /// Always within `[1, 99]`.
    pub quantity: u32,
}

impl CartItem {
    fn new(summary: ProductSummary, quantity: u32) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            price: summary.price,
            image: summary.image,
            storage: summary.storage,
            collection: summary.collection,
            quantity,
        }
    }
}

/// The shopping cart of one client profile.
pub struct CartStore {
    items: Vec<CartItem>,
    bridge: SlotBridge,
}

impl CartStore {
    /// Open the cart, rehydrating from its slot. A missing or
    /// unreadable slot yields an empty cart.
    #[must_use]
    pub fn open(bridge: SlotBridge) -> Self {
        let items = bridge.load(CART_SLOT);
        Self { items, bridge }
    }

    /// Add a product to the cart.
    ///
    /// If the product is already present its quantity accumulates,
    /// clamped to 99 (accumulation clamps the same way `set_quantity`
    /// does); otherwise a new line is appended. Either way the caller
    /// gets an "added" confirmation.
    pub fn add_item(&mut self, summary: ProductSummary, quantity: u32) -> Notice {
        let quantity = quantity.clamp(MIN_QUANTITY, MAX_QUANTITY);

        if let Some(item) = self.items.iter_mut().find(|i| i.id == summary.id) {
            item.quantity = item.quantity.saturating_add(quantity).min(MAX_QUANTITY);
        } else {
            self.items.push(CartItem::new(summary, quantity));
        }

        self.persist();
        Notice::AddedToCart
    }

    /// Remove a product from the cart. A no-op when absent, but the
    /// confirmation is signaled unconditionally.
    pub fn remove_item(&mut self, id: ProductId) -> Notice {
        self.items.retain(|i| i.id != id);
        self.persist();
        Notice::RemovedFromCart
    }

    /// Replace a line's quantity, clamped to `[1, 99]`. A no-op when
    /// the product is absent.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity.clamp(MIN_QUANTITY, MAX_QUANTITY);
            self.persist();
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) -> Notice {
        self.items.clear();
        self.persist();
        Notice::CartCleared
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of `price x quantity` over all lines, recomputed on every
    /// read.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|i| i.price.times(i.quantity)).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    fn persist(&self) {
        self.bridge.save(CART_SLOT, &self.items);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn summary(id: ProductId, name: &str, cents: u32) -> ProductSummary {
        ProductSummary {
            id,
            name: name.to_owned(),
            price: Price::from_cents(cents),
            image: None,
            storage: Some("64GB".to_owned()),
            collection: Some("One Piece".to_owned()),
        }
    }

    fn cart() -> CartStore {
        // Unwritable bridge: exercises in-memory behavior under
        // persistence failure at the same time.
        CartStore::open(SlotBridge::new(PathBuf::from("/dev/null/none")))
    }

    #[test]
    fn test_add_accumulates_single_entry_per_id() {
        let mut cart = cart();
        let id = ProductId::new();

        assert_eq!(cart.add_item(summary(id, "Luffy Drive", 4999), 2), Notice::AddedToCart);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total(), Price::from_cents(4999).times(2));

        cart.add_item(summary(id, "Luffy Drive", 4999), 1);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items().first().unwrap().quantity, 3);
    }

    #[test]
    fn test_no_duplicate_ids_across_mixed_operations() {
        let mut cart = cart();
        let a = ProductId::new();
        let b = ProductId::new();

        cart.add_item(summary(a, "A", 1000), 1);
        cart.add_item(summary(b, "B", 2000), 1);
        cart.add_item(summary(a, "A", 1000), 5);
        cart.remove_item(b);
        cart.add_item(summary(b, "B", 2000), 2);

        let mut ids: Vec<ProductId> = cart.items().iter().map(|i| i.id).collect();
        let len = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn test_add_clamps_accumulation_at_99() {
        let mut cart = cart();
        let id = ProductId::new();

        cart.add_item(summary(id, "A", 1000), 98);
        cart.add_item(summary(id, "A", 1000), 5);
        assert_eq!(cart.items().first().unwrap().quantity, 99);
    }

    #[test]
    fn test_add_treats_zero_quantity_as_one() {
        let mut cart = cart();
        let id = ProductId::new();

        cart.add_item(summary(id, "A", 1000), 0);
        assert_eq!(cart.items().first().unwrap().quantity, 1);
    }

    #[test]
    fn test_set_quantity_clamps_and_ignores_absent() {
        let mut cart = cart();
        let id = ProductId::new();
        cart.add_item(summary(id, "A", 1000), 5);

        cart.set_quantity(id, 0);
        assert_eq!(cart.items().first().unwrap().quantity, 1);

        cart.set_quantity(id, 500);
        assert_eq!(cart.items().first().unwrap().quantity, 99);

        cart.set_quantity(ProductId::new(), 7);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items().first().unwrap().quantity, 99);
    }

    #[test]
    fn test_remove_signals_even_when_absent() {
        let mut cart = cart();
        assert_eq!(cart.remove_item(ProductId::new()), Notice::RemovedFromCart);
    }

    #[test]
    fn test_totals_recompute_and_are_idempotent() {
        let mut cart = cart();
        cart.add_item(summary(ProductId::new(), "A", 4999), 2);
        cart.add_item(summary(ProductId::new(), "B", 6999), 1);

        let expected = Price::from_cents(4999).times(2) + Price::from_cents(6999).times(1);
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_clear() {
        let mut cart = cart();
        cart.add_item(summary(ProductId::new(), "A", 1000), 3);

        assert_eq!(cart.clear(), Notice::CartCleared);
        assert!(cart.items().is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_round_trip_through_slot() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = SlotBridge::new(dir.path().to_path_buf());
        let id = ProductId::new();

        let mut cart = CartStore::open(bridge.clone());
        cart.add_item(summary(id, "Luffy Drive", 4999), 2);

        let reopened = CartStore::open(bridge);
        assert_eq!(reopened.items(), cart.items());
        assert_eq!(reopened.count(), 2);
        assert_eq!(reopened.total(), Price::from_cents(4999).times(2));
    }
}
