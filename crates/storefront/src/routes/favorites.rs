//! Favorites route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::Product;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::session_keys;
use crate::services::ImageProber;
use crate::state::AppState;
use crate::store::FavoritesState;

use super::ProductForm;

// =============================================================================
// Views
// =============================================================================

/// Favorite card display data for templates.
///
/// Unlike the listing page, favorite images go through the preload prober:
/// a URL recorded as failed renders the bundled placeholder instead.
#[derive(Clone)]
pub struct FavoriteCardView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub price_amount: String,
    pub image: String,
    pub category: String,
    pub stock: u32,
}

impl FavoriteCardView {
    async fn resolve(product: &Product, images: &ImageProber) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            price_amount: product.price.amount.to_string(),
            image: images.resolve(&product.image).await,
            category: product.category.clone(),
            stock: product.stock,
        }
    }
}

/// Toggle favorite form data: the product payload plus the page to return
/// to afterwards.
///
/// The product fields are spelled out rather than nested: urlencoded forms
/// are flat, and `serde(flatten)` does not round-trip numeric fields
/// through that format.
#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteForm {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: rust_decimal::Decimal,
    #[serde(default)]
    pub image: String,
    pub category: String,
    pub stock: u32,
    #[serde(default)]
    pub redirect_to: Option<String>,
}

impl ToggleFavoriteForm {
    fn into_product(self) -> Product {
        ProductForm {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            category: self.category,
            stock: self.stock,
        }
        .into()
    }
}

/// Favorites page template.
#[derive(Template, WebTemplate)]
#[template(path = "favorites/index.html")]
pub struct FavoritesTemplate {
    pub items: Vec<FavoriteCardView>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the favorites page.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(_shopper): RequireAuth,
    session: Session,
) -> Result<impl IntoResponse> {
    let favorites: FavoritesState = session
        .get(session_keys::FAVORITES)
        .await?
        .unwrap_or_default();

    let mut items = Vec::with_capacity(favorites.items().len());
    for product in favorites.items() {
        items.push(FavoriteCardView::resolve(product, state.images()).await);
    }

    Ok(FavoritesTemplate { items })
}

/// Toggle a product's favorite membership, then return to the page the
/// form was posted from.
#[instrument(skip(session, form))]
pub async fn toggle(session: Session, Form(mut form): Form<ToggleFavoriteForm>) -> Result<Response> {
    let mut favorites: FavoritesState = session
        .get(session_keys::FAVORITES)
        .await?
        .unwrap_or_default();

    // Only same-site paths are honored as redirect targets.
    let target = form
        .redirect_to
        .take()
        .filter(|t| t.starts_with('/') && !t.starts_with("//"))
        .unwrap_or_else(|| "/".to_string());

    favorites.toggle(form.into_product());
    session.insert(session_keys::FAVORITES, &favorites).await?;

    Ok(Redirect::to(&target).into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_form_parses_with_redirect() {
        let form: ToggleFavoriteForm = serde_urlencoded::from_str(
            "id=1&name=X&description=&price=9.99&image=u&category=a&stock=2&redirect_to=%2Ffavorites",
        )
        .unwrap();

        assert_eq!(form.id, 1);
        assert_eq!(form.redirect_to.as_deref(), Some("/favorites"));
    }

    #[test]
    fn test_toggle_form_redirect_is_optional() {
        let form: ToggleFavoriteForm =
            serde_urlencoded::from_str("id=1&name=X&price=9.99&category=a&stock=2").unwrap();

        assert!(form.redirect_to.is_none());
    }
}
