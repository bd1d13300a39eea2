//! Application state shared across handlers.
//!
//! Everything that used to be ambient in the original client (the single
//! store instance, the module-level image cache) is explicit context here:
//! created once at application start, never torn down mid-session.

use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::services::{AuthClient, ImageProber};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    auth: AuthClient,
    images: ImageProber,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = CatalogClient::new(&config.catalog);
        let auth = AuthClient::new(&config.auth);
        let images = ImageProber::new();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                auth,
                images,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the auth API client.
    #[must_use]
    pub fn auth(&self) -> &AuthClient {
        &self.inner.auth
    }

    /// Get a reference to the image prober.
    #[must_use]
    pub fn images(&self) -> &ImageProber {
        &self.inner.images
    }
}
