//! Products slice.
//!
//! Rebuilt from a catalog fetch on every listing request. On a fetch
//! failure the item list is cleared and a human-readable error message is
//! carried instead; the listing page renders the message with a retry
//! affordance.

use crate::catalog::{CatalogError, Product};

use techvibe_core::ProductId;

/// The products slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductsState {
    items: Vec<Product>,
    error: Option<String>,
    selected_category: Option<String>,
}

impl ProductsState {
    /// Build the slice from a fetch result.
    ///
    /// A failed fetch clears the item list and records the error message.
    #[must_use]
    pub fn from_fetch(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(items) => Self {
                items,
                error: None,
                selected_category: None,
            },
            Err(e) => {
                tracing::error!(error = %e, "Catalog fetch failed");
                Self {
                    items: Vec::new(),
                    error: Some(e.user_message()),
                    selected_category: None,
                }
            }
        }
    }

    /// Select a category filter; `None` shows everything.
    pub fn select_category(&mut self, category: Option<String>) {
        self.selected_category = category;
    }

    /// The full, unfiltered item list.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// The fetch error message, if the last fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The selected category, if any.
    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.items {
            let category = product.category.as_str();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// The items visible under the selected category.
    ///
    /// A pure, exact-match predicate over the fetched list; the underlying
    /// items are never mutated and no request is re-issued.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Product> {
        match self.selected_category.as_deref() {
            Some(category) => self
                .items
                .iter()
                .filter(|p| p.category == category)
                .collect(),
            None => self.items.iter().collect(),
        }
    }

    /// Find a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }
}
