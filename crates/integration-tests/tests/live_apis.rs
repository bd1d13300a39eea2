//! Tests against the live public demo APIs.
//!
//! These require network access and depend on third-party uptime, so they
//! are ignored by default:
//!
//! ```bash
//! cargo test -p techvibe-integration-tests -- --ignored
//! ```

use techvibe_storefront::catalog::{CatalogClient, STOCK_RANGE};
use techvibe_storefront::config::StorefrontConfig;
use techvibe_storefront::services::auth::{AuthClient, DEMO_EMAIL, DEMO_PASSWORD};

fn config() -> StorefrontConfig {
    StorefrontConfig::from_env().expect("Failed to load configuration")
}

#[tokio::test]
#[ignore = "Requires network access to the public catalog API"]
async fn test_catalog_fetch_live() {
    let client = CatalogClient::new(&config().catalog);

    let products = client
        .fetch_products()
        .await
        .expect("Catalog fetch failed");

    assert!(!products.is_empty(), "catalog returned no products");
    for product in &products {
        assert!(!product.name.is_empty());
        assert!(STOCK_RANGE.contains(&product.stock));
    }
}

#[tokio::test]
#[ignore = "Requires network access to the public auth API"]
async fn test_login_with_demo_credentials_live() {
    let client = AuthClient::new(&config().auth);

    let token = client
        .login(DEMO_EMAIL, DEMO_PASSWORD)
        .await
        .expect("Demo login failed");

    assert!(!token.is_empty(), "auth API returned an empty token");
}

#[tokio::test]
#[ignore = "Requires network access to the public auth API"]
async fn test_login_with_unknown_user_is_rejected_live() {
    let client = AuthClient::new(&config().auth);

    let result = client.login("unknown.user@example.com", "whatever").await;

    assert!(result.is_err(), "unknown user unexpectedly logged in");
}
