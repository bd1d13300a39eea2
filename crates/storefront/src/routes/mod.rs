//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Product listing (guarded)
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products/{id}          - Product detail (guarded)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page (guarded)
//! POST /cart/add               - Add product (returns cart count fragment)
//! POST /cart/update            - Set quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Favorites
//! GET  /favorites              - Favorites page (guarded)
//! POST /favorites/toggle       - Toggle membership, redirect back
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! POST /auth/logout            - Logout action
//!
//! Unknown paths redirect to the login page.
//! ```
//!
//! Guarded pages require a stored token; the mutation endpoints only touch
//! the visitor's own session state, which mirrors the original client
//! where the route guard wrapped pages, not store actions.

pub mod auth;
pub mod cart;
pub mod favorites;
pub mod home;
pub mod products;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use techvibe_core::{CurrencyCode, Price, ProductId};

use crate::catalog::Product;
use crate::state::AppState;

/// A product payload carried through cart and favorites forms.
///
/// The slices store whole products, so mutation forms echo the product the
/// page was rendered from - the server-side analogue of dispatching an
/// action with the product as payload.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
    pub category: String,
    pub stock: u32,
}

impl From<ProductForm> for Product {
    fn from(form: ProductForm) -> Self {
        Self {
            id: ProductId::new(form.id),
            name: form.name,
            description: form.description,
            price: Price::new(form.price, CurrencyCode::USD),
            image: form.image,
            category: form.category,
            stock: form.stock,
        }
    }
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the favorites routes router.
pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::index))
        .route("/toggle", post(favorites::toggle))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Fallback for unknown paths: back to the login page.
pub async fn fallback() -> Redirect {
    Redirect::to("/auth/login")
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page (product listing)
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Favorites routes
        .nest("/favorites", favorites_routes())
        // Auth routes
        .nest("/auth", auth_routes())
}
