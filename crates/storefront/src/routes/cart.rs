//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart slice itself lives in the visitor's session; every mutation
//! loads the slice, applies exactly one operation, and saves it back.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use techvibe_core::{CurrencyCode, Price, ProductId};

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::session_keys;
use crate::store::{CartItem, CartState};

use super::ProductForm;

/// Maximum quantity the stepper will go up to.
///
/// UI-level bound only; the slice itself does not clamp.
const MAX_QUANTITY: u32 = 99;

// =============================================================================
// Views
// =============================================================================

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub line_price: String,
    pub image: String,
    pub quantity: u32,
    /// Quantity the stepper's minus button posts (0 removes the line).
    pub minus_quantity: u32,
    /// Quantity the stepper's plus button posts (capped at the UI max).
    pub plus_quantity: u32,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: usize,
}

impl From<&CartState> for CartView {
    fn from(cart: &CartState) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: Price::new(cart.total(), CurrencyCode::USD).display(),
            item_count: cart.item_count(),
        }
    }
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.product.id.as_i32(),
            name: item.product.name.clone(),
            price: item.product.price.display(),
            line_price: Price::new(item.line_total(), CurrencyCode::USD).display(),
            image: item.product.image.clone(),
            quantity: item.quantity,
            minus_quantity: item.quantity.saturating_sub(1),
            plus_quantity: item.quantity.saturating_add(1).min(MAX_QUANTITY),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart slice from the session.
async fn load_cart(session: &Session) -> Result<CartState> {
    Ok(session
        .get::<CartState>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Save the cart slice back to the session.
async fn save_cart(session: &Session, cart: &CartState) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

// =============================================================================
// Forms & Templates
// =============================================================================

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: i32,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: i32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(session))]
pub async fn show(
    RequireAuth(_shopper): RequireAuth,
    session: Session,
) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;

    Ok(CartShowTemplate {
        cart: CartView::from(&cart),
    })
}

/// Add a product to the cart (HTMX).
///
/// Increments the quantity when the product is already in the cart.
/// Returns the cart count fragment and triggers `cart-updated` so other
/// fragments refresh.
#[instrument(skip(session, form))]
pub async fn add(session: Session, Form(form): Form<ProductForm>) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    cart.add(form.into());
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.item_count(),
        },
    )
        .into_response())
}

/// Set a cart line's quantity exactly (HTMX).
///
/// A quantity of zero removes the line, which is what the stepper's minus
/// button posts from quantity one.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    cart.update_quantity(ProductId::new(form.id), form.quantity);
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    cart.remove(ProductId::new(form.id));
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;

    Ok(CartCountTemplate {
        count: cart.item_count(),
    })
}
