//! Favorites slice.
//!
//! Products are stored verbatim in a membership list, insertion order.

use serde::{Deserialize, Serialize};

use techvibe_core::ProductId;

use crate::catalog::Product;

/// The favorites slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoritesState {
    items: Vec<Product>,
}

impl FavoritesState {
    /// Toggle a product's membership.
    ///
    /// If a product with the same id is present it is removed; otherwise
    /// the given product is appended.
    pub fn toggle(&mut self, product: Product) {
        if self.contains(product.id) {
            self.items.retain(|p| p.id != product.id);
        } else {
            self.items.push(product);
        }
    }

    /// Whether a product id is in the list.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// The favorited products, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
