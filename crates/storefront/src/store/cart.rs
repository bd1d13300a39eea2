//! Cart slice.
//!
//! The cart holds at most one entry per product id. `total` is derived
//! state: it is recomputed after every mutation and never mutated on its
//! own, so it cannot diverge from the item list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use techvibe_core::ProductId;

use crate::catalog::Product;

/// A product in the cart together with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.times(self.quantity)
    }
}

/// The cart slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    items: Vec<CartItem>,
    total: Decimal,
}

impl CartState {
    /// Add a product to the cart.
    ///
    /// If an entry with the same id already exists its quantity is
    /// incremented by one; otherwise a new entry with quantity one is
    /// appended.
    pub fn add(&mut self, product: Product) {
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem {
                product,
                quantity: 1,
            }),
        }
        self.recompute_total();
    }

    /// Set the quantity of an entry exactly.
    ///
    /// A quantity of zero removes the entry. The slice does not clamp;
    /// the quantity stepper in the UI enforces its own 1..=99 range.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == id) {
            item.quantity = quantity;
        }
        self.recompute_total();
    }

    /// Remove an entry; no-op when the id is absent.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|i| i.product.id != id);
        self.recompute_total();
    }

    /// The cart entries, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The derived total over all entries.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Number of distinct entries (the navbar badge count).
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(CartItem::line_total).sum();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use techvibe_core::{CurrencyCode, Price};

    fn product(id: i32, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            price: Price::new(price.parse().unwrap(), CurrencyCode::USD),
            image: String::new(),
            category: "electronics".to_string(),
            stock: 10,
        }
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_new_product() {
        let mut cart = CartState::default();
        cart.add(product(1, "9.99"));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.total(), dec("9.99"));
    }

    #[test]
    fn test_add_same_product_twice_increments_quantity() {
        let mut cart = CartState::default();
        cart.add(product(1, "9.99"));
        cart.add(product(1, "9.99"));

        // At most one entry per product id
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total(), dec("19.98"));
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut cart = CartState::default();
        cart.add(product(1, "2.50"));
        cart.update_quantity(ProductId::new(1), 4);

        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.total(), dec("10.00"));
    }

    #[test]
    fn test_update_quantity_zero_is_remove() {
        let mut cart = CartState::default();
        cart.add(product(1, "2.50"));
        cart.add(product(2, "1.00"));

        let mut removed = cart.clone();
        removed.remove(ProductId::new(1));

        cart.update_quantity(ProductId::new(1), 0);
        assert_eq!(cart, removed);
    }

    #[test]
    fn test_update_quantity_does_not_clamp() {
        let mut cart = CartState::default();
        cart.add(product(1, "1.00"));
        cart.update_quantity(ProductId::new(1), 250);

        assert_eq!(cart.items()[0].quantity, 250);
        assert_eq!(cart.total(), dec("250.00"));
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = CartState::default();
        cart.add(product(1, "1.00"));
        cart.update_quantity(ProductId::new(99), 5);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = CartState::default();
        cart.add(product(1, "1.00"));
        cart.remove(ProductId::new(99));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total(), dec("1.00"));
    }

    #[test]
    fn test_total_tracks_arbitrary_mutation_sequences() {
        let mut cart = CartState::default();
        cart.add(product(1, "9.99"));
        cart.add(product(2, "0.10"));
        cart.add(product(2, "0.10"));
        cart.update_quantity(ProductId::new(1), 3);
        cart.remove(ProductId::new(2));
        cart.add(product(3, "5.00"));
        cart.update_quantity(ProductId::new(3), 0);

        // Invariant: displayed total equals the sum over surviving entries
        let expected: Decimal = cart.items().iter().map(CartItem::line_total).sum();
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.total(), dec("29.97"));
    }

    #[test]
    fn test_item_count_is_distinct_entries() {
        let mut cart = CartState::default();
        cart.add(product(1, "1.00"));
        cart.add(product(1, "1.00"));
        cart.add(product(2, "1.00"));

        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let mut cart = CartState::default();
        cart.add(product(1, "9.99"));
        cart.remove(ProductId::new(1));

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_serde_roundtrip_preserves_total() {
        let mut cart = CartState::default();
        cart.add(product(1, "9.99"));
        cart.add(product(1, "9.99"));

        let json = serde_json::to_string(&cart).unwrap();
        let restored: CartState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
        assert_eq!(restored.total(), dec("19.98"));
    }
}
