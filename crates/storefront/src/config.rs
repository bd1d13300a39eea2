//! Storefront configuration loaded from environment variables.
//!
//! Every variable has a default suitable for the public demo APIs, so the
//! binary runs with zero configuration.
//!
//! # Environment Variables
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront
//!   (default: <http://localhost:3000>)
//! - `CATALOG_API_URL` - Product catalog API base URL
//!   (default: <https://fakestoreapi.com>)
//! - `AUTH_API_URL` - Authentication stub API base URL
//!   (default: <https://reqres.in/api>)
//! - `AUTH_API_KEY` - Static API key sent with login requests
//!   (default: the published demo key)
//! - `SENTRY_DSN` - Sentry error tracking DSN (default: unset)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Default base URL for the product catalog demo API.
pub const DEFAULT_CATALOG_API_URL: &str = "https://fakestoreapi.com";

/// Default base URL for the authentication stub demo API.
pub const DEFAULT_AUTH_API_URL: &str = "https://reqres.in/api";

/// Published API key for the free tier of the authentication stub.
pub const DEFAULT_AUTH_API_KEY: &str = "reqres-free-v1";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Product catalog API configuration
    pub catalog: CatalogApiConfig,
    /// Authentication stub API configuration
    pub auth: AuthApiConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Product catalog API configuration.
#[derive(Debug, Clone)]
pub struct CatalogApiConfig {
    /// Base URL of the catalog API (no trailing slash)
    pub base_url: String,
}

/// Authentication stub API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct AuthApiConfig {
    /// Base URL of the auth API (no trailing slash)
    pub base_url: String,
    /// Static API key sent in the `x-api-key` request header
    pub api_key: SecretString,
}

impl std::fmt::Debug for AuthApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");

        let catalog = CatalogApiConfig {
            base_url: trim_trailing_slash(get_env_or_default(
                "CATALOG_API_URL",
                DEFAULT_CATALOG_API_URL,
            )),
        };
        let auth = AuthApiConfig {
            base_url: trim_trailing_slash(get_env_or_default(
                "AUTH_API_URL",
                DEFAULT_AUTH_API_URL,
            )),
            api_key: SecretString::from(get_env_or_default("AUTH_API_KEY", DEFAULT_AUTH_API_KEY)),
        };
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            catalog,
            auth,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Normalize a base URL so endpoint paths can be appended with `/`.
fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
