//! Image preload probing with memoized results.
//!
//! Catalog image URLs point at a third-party host and sometimes go stale.
//! Before rendering the favorites grid, each URL is probed once and the
//! outcome is memoized in a process-wide map: a URL recorded as failed is
//! substituted with the bundled placeholder on every subsequent render.
//!
//! The map is unbounded, never evicted, and lives for the process - it is
//! a memoization of an effectively-immutable fact, not a cache with a
//! freshness policy.

use std::sync::Arc;

use moka::future::Cache;
use url::Url;

/// Path of the bundled placeholder image.
pub const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.svg";

/// Probes image URLs and memoizes the outcome.
#[derive(Clone)]
pub struct ImageProber {
    inner: Arc<ImageProberInner>,
}

struct ImageProberInner {
    client: reqwest::Client,
    /// URL -> load-success flag. Unbounded by design.
    results: Cache<String, bool>,
}

impl Default for ImageProber {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageProber {
    /// Create a new prober with an empty result map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ImageProberInner {
                client: reqwest::Client::new(),
                results: Cache::builder().build(),
            }),
        }
    }

    /// Resolve an image reference to a renderable URL.
    ///
    /// - Empty references resolve to the placeholder immediately.
    /// - Relative references are local assets and served from `/static`.
    /// - Absolute URLs are probed once; failures resolve to the
    ///   placeholder from then on.
    pub async fn resolve(&self, image: &str) -> String {
        if image.is_empty() {
            return PLACEHOLDER_IMAGE.to_string();
        }

        if Url::parse(image).is_err() {
            // Not an absolute URL: a bundled asset path, nothing to probe.
            return format!("/static/images/{image}");
        }

        let loaded = match self.inner.results.get(image).await {
            Some(flag) => flag,
            None => {
                let flag = self.probe(image).await;
                self.inner.results.insert(image.to_string(), flag).await;
                flag
            }
        };

        if loaded {
            image.to_string()
        } else {
            PLACEHOLDER_IMAGE.to_string()
        }
    }

    /// Best-effort preload probe. Any transport error counts as a failed
    /// load, same as the browser's image `onerror`.
    async fn probe(&self, url: &str) -> bool {
        match self.inner.client.get(url).send().await {
            Ok(response) => {
                let ok = response.status().is_success();
                if !ok {
                    tracing::warn!(url = %url, status = %response.status(), "Image probe failed");
                }
                ok
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Image probe failed");
                false
            }
        }
    }

    /// Record a probe outcome directly (test seam).
    #[cfg(test)]
    async fn record(&self, url: &str, loaded: bool) {
        self.inner.results.insert(url.to_string(), loaded).await;
    }
}
