//! Product catalog API client.
//!
//! The catalog is a public demo REST API returning a JSON array of product
//! records. One GET fetches the whole catalog; category filtering happens
//! client-side over the fetched list and never re-issues the request.
//!
//! No caching, no retries, no timeout policy: a hung request hangs the
//! requesting view, which is the documented behavior of this system.

mod conversions;
mod types;

pub use conversions::{DEFAULT_CATEGORY, DEFAULT_NAME, STOCK_RANGE, product_from_record};
pub use types::{Product, RawProduct};

use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use crate::config::CatalogApiConfig;

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport failure (no response received).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog responded with a non-success status.
    #[error("catalog returned status {0}")]
    Status(u16),

    /// The response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response parsed but was not the expected JSON array.
    #[error("unexpected catalog payload: expected a JSON array")]
    UnexpectedPayload,
}

impl CatalogError {
    /// The message shown in the products view when a fetch fails.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(_) => "Network error. Please check your internet connection".to_string(),
            Self::Status(_) => "Error loading products. Please try again later".to_string(),
            Self::Parse(_) | Self::UnexpectedPayload => {
                "Received an invalid response from the catalog".to_string()
            }
        }
    }
}

/// Client for the product catalog demo API.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog API client.
    #[must_use]
    pub fn new(config: &CatalogApiConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    /// Fetch the full product list.
    ///
    /// Each record is mapped through the defensive conversion layer:
    /// malformed records are kept with defaulted fields (and a warning),
    /// and a fresh placeholder stock count is assigned per product.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, a
    /// non-JSON body, or a payload that is not an array.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/products", self.inner.base_url);

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Status(status.as_u16()));
        }

        let payload: serde_json::Value = serde_json::from_str(&body)?;
        let records = match payload {
            serde_json::Value::Array(records) => records,
            other => {
                tracing::error!(
                    payload_type = %json_type_name(&other),
                    "Catalog API returned a non-array payload"
                );
                return Err(CatalogError::UnexpectedPayload);
            }
        };

        Ok(records.into_iter().map(product_from_record).collect())
    }
}

/// Human-readable JSON type name for error logs.
fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
