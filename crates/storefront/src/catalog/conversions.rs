//! Conversion from raw catalog records to [`Product`].
//!
//! The catalog API is a public demo and its records are not trusted:
//! missing or wrongly-typed fields are replaced with fixed defaults, with a
//! warning per degraded record, and a fetch never fails because of a single
//! record.

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use techvibe_core::{CurrencyCode, Price, ProductId};

use super::types::{Product, RawProduct};

/// Default display name for records missing a title.
pub const DEFAULT_NAME: &str = "Unknown product";

/// Default category for records missing one.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Placeholder stock range (inclusive). The upstream catalog has no
/// inventory data, so each fetch assigns a fresh random count.
pub const STOCK_RANGE: std::ops::RangeInclusive<u32> = 1..=50;

/// Convert one raw catalog record into a [`Product`].
///
/// Records that fail to deserialize at all still produce a fully-defaulted
/// product; the fallback policy is total.
pub fn product_from_record(record: serde_json::Value) -> Product {
    let raw: RawProduct = match serde_json::from_value(record) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed catalog record, substituting defaults");
            RawProduct::default()
        }
    };
    product_from_raw(raw)
}

/// Convert a parsed [`RawProduct`] into a [`Product`], applying defaults.
pub fn product_from_raw(raw: RawProduct) -> Product {
    if raw.title.is_none() || raw.price.is_none() || raw.image.is_none() {
        tracing::warn!(id = ?raw.id, "Incomplete catalog record, substituting defaults");
    }

    let mut rng = rand::rng();

    // Distinct records must stay distinct downstream (cart and favorites
    // are keyed by id), so a missing id gets a random one rather than 0.
    let id = raw
        .id
        .unwrap_or_else(|| rng.random_range(1..=i32::MAX));

    let amount = raw
        .price
        .and_then(Decimal::from_f64)
        .map_or(Decimal::ZERO, |d| d.round_dp(2));

    Product {
        id: ProductId::new(id),
        name: raw.title.unwrap_or_else(|| DEFAULT_NAME.to_string()),
        description: raw.description.unwrap_or_default(),
        price: Price::new(amount, CurrencyCode::USD),
        image: raw.image.unwrap_or_default(),
        category: raw.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        stock: rng.random_range(STOCK_RANGE),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_complete_record_maps_all_fields() {
        let product = product_from_record(json!({
            "id": 1,
            "title": "X",
            "description": "A thing",
            "price": 9.99,
            "image": "u",
            "category": "electronics",
        }));

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "X");
        assert_eq!(product.description, "A thing");
        assert_eq!(product.price.display(), "$9.99");
        assert_eq!(product.image, "u");
        assert_eq!(product.category, "electronics");
        assert!(STOCK_RANGE.contains(&product.stock));
    }

    #[test]
    fn test_missing_price_defaults_to_zero() {
        let product = product_from_record(json!({
            "id": 2,
            "title": "No price",
            "image": "u",
        }));

        assert_eq!(product.price.amount, Decimal::ZERO);
        assert_eq!(product.name, "No price");
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let product = product_from_record(json!({ "id": 3 }));

        assert_eq!(product.name, DEFAULT_NAME);
        assert_eq!(product.description, "");
        assert_eq!(product.price.amount, Decimal::ZERO);
        assert_eq!(product.image, "");
        assert_eq!(product.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_missing_id_gets_random_positive_id() {
        let product = product_from_record(json!({ "title": "No id" }));
        assert!(product.id.as_i32() >= 1);
    }

    #[test]
    fn test_wrongly_typed_record_still_produces_product() {
        // A record that does not deserialize at all (price is an object)
        // must not abort the fetch.
        let product = product_from_record(json!({
            "id": 4,
            "title": "Broken",
            "price": { "amount": "9.99" },
        }));

        assert_eq!(product.name, DEFAULT_NAME);
        assert_eq!(product.price.amount, Decimal::ZERO);
    }

    #[test]
    fn test_price_is_rounded_to_cents() {
        let product = product_from_record(json!({
            "id": 5,
            "title": "X",
            "price": 10.994999,
            "image": "u",
        }));

        assert_eq!(product.price.display(), "$10.99");
    }

    #[test]
    fn test_stock_is_regenerated_within_range() {
        for _ in 0..100 {
            let product = product_from_record(json!({
                "id": 6,
                "title": "X",
                "price": 1.0,
                "image": "u",
            }));
            assert!(STOCK_RANGE.contains(&product.stock));
        }
    }
}
