//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use techvibe_core::ProductId;

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::session_keys;
use crate::state::AppState;
use crate::store::{FavoritesState, ProductsState};

use super::home::ProductCardView;

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductCardView,
}

/// Product-not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {}

/// Display the product detail page.
///
/// The detail view reads from the same fetched list as the listing page;
/// an id that is not in the catalog renders a not-found page rather than
/// an error.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(_shopper): RequireAuth,
    Path(id): Path<i32>,
    session: Session,
) -> Result<Response> {
    let products = ProductsState::from_fetch(state.catalog().fetch_products().await);

    let Some(product) = products.find(ProductId::new(id)) else {
        return Ok((StatusCode::NOT_FOUND, ProductNotFoundTemplate {}).into_response());
    };

    let favorites: FavoritesState = session
        .get(session_keys::FAVORITES)
        .await?
        .unwrap_or_default();

    Ok(ProductShowTemplate {
        product: ProductCardView::new(product, &favorites),
    }
    .into_response())
}
