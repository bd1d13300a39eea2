//! Catalog domain and wire types.

use serde::{Deserialize, Serialize};

use techvibe_core::{Price, ProductId};

/// A product as rendered and carried through cart and favorites state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Upstream catalog identifier (randomly assigned when missing).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long description (may be empty).
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image URL (may be empty).
    pub image: String,
    /// Category label used for the exact-match filter.
    pub category: String,
    /// Placeholder stock count, assigned client-side per fetch.
    pub stock: u32,
}

/// The catalog API's record schema, as this storefront understands it.
///
/// Every field is optional: the conversion layer substitutes explicit
/// defaults for whatever is missing and logs a warning per degraded record.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawProduct {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub category: Option<String>,
}
