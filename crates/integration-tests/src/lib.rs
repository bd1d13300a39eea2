//! Integration tests for TechVibe.
//!
//! # Test Categories
//!
//! - `storefront_routes` - Drives the assembled router over a real TCP
//!   socket: route gating, login pre-validation, cart and favorites flows.
//!   These tests never reach the public demo APIs.
//! - `live_apis` - `#[ignore]`d tests against the live catalog and auth
//!   demo APIs. Run with `cargo test -p techvibe-integration-tests -- --ignored`.

use std::net::SocketAddr;

use axum::{Router, routing::get};

use techvibe_storefront::config::StorefrontConfig;
use techvibe_storefront::middleware::create_session_layer;
use techvibe_storefront::routes;
use techvibe_storefront::state::AppState;

/// Spawn the storefront app on an ephemeral local port.
///
/// The router is assembled the same way as the binary, minus the static
/// file service (tests do not depend on the asset directory).
///
/// # Panics
///
/// Panics if the listener cannot be bound; tests have no meaningful way to
/// continue without it.
pub async fn spawn_app() -> SocketAddr {
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");
    let state = AppState::new(config.clone());

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(routes::routes())
        .fallback(routes::fallback)
        .layer(create_session_layer(&config.base_url))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });

    addr
}

/// A reqwest client with a cookie store, so session state survives across
/// requests, and redirects left un-followed, so gating is observable.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}
