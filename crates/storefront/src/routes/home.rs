//! Home page (product listing) route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::Product;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::session_keys;
use crate::state::AppState;
use crate::store::{FavoritesState, ProductsState};

// =============================================================================
// Views
// =============================================================================

/// Product card display data for templates.
///
/// Carries both display strings and the raw field values echoed through
/// the cart/favorites mutation forms.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub price_amount: String,
    pub image: String,
    pub category: String,
    pub stock: u32,
    pub favorited: bool,
}

impl ProductCardView {
    pub fn new(product: &Product, favorites: &FavoritesState) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            price_amount: product.price.amount.to_string(),
            image: product.image.clone(),
            category: product.category.clone(),
            stock: product.stock,
            favorited: favorites.contains(product.id),
        }
    }
}

/// A category option in the filter dropdown.
#[derive(Clone)]
pub struct CategoryOptionView {
    pub name: String,
    pub selected: bool,
}

// =============================================================================
// Query & Template
// =============================================================================

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Fetch error message; empty when the fetch succeeded.
    pub error: String,
    /// Whether the catalog itself (before filtering) came back empty.
    pub catalog_empty: bool,
    pub categories: Vec<CategoryOptionView>,
    pub products: Vec<ProductCardView>,
}

/// Display the product listing.
///
/// Fetches the catalog on every visit (the original client re-fetched on
/// every mount); the category filter is applied client-side over the
/// fetched list.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    RequireAuth(_shopper): RequireAuth,
    Query(query): Query<CatalogQuery>,
    session: Session,
) -> Result<impl IntoResponse> {
    let mut products = ProductsState::from_fetch(state.catalog().fetch_products().await);
    products.select_category(query.category.filter(|c| !c.is_empty()));

    let favorites: FavoritesState = session
        .get(session_keys::FAVORITES)
        .await?
        .unwrap_or_default();

    let categories = products
        .categories()
        .into_iter()
        .map(|name| CategoryOptionView {
            name: name.to_string(),
            selected: products.selected_category() == Some(name),
        })
        .collect();

    let cards = products
        .filtered()
        .into_iter()
        .map(|p| ProductCardView::new(p, &favorites))
        .collect();

    Ok(HomeTemplate {
        error: products.error().unwrap_or_default().to_string(),
        catalog_empty: products.items().is_empty(),
        categories,
        products: cards,
    })
}
