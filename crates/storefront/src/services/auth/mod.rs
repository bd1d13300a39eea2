//! Authentication service.
//!
//! Logs in against the public authentication stub API. The stub issues an
//! opaque token for its fixed demo accounts; this storefront stores the
//! token in the session and never validates it afterwards - presence, not
//! validity, gates route access.

mod error;

pub use error::{AuthError, ErrorBody};

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use techvibe_core::Email;

use crate::config::AuthApiConfig;

/// Demo account email accepted by the auth stub.
pub const DEMO_EMAIL: &str = "eve.holt@reqres.in";

/// Demo account password accepted by the auth stub.
pub const DEMO_PASSWORD: &str = "cityslicka";

/// Login request body.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Login success response body.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: Option<String>,
}

/// Client for the authentication stub API.
#[derive(Clone)]
pub struct AuthClient {
    inner: Arc<AuthClientInner>,
}

struct AuthClientInner {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl AuthClient {
    /// Create a new auth API client.
    #[must_use]
    pub fn new(config: &AuthApiConfig) -> Self {
        Self {
            inner: Arc::new(AuthClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                api_key: config.api_key.clone(),
            }),
        }
    }

    /// Attempt a login.
    ///
    /// Inputs are trimmed and shape-checked before any request is made, so
    /// an obviously invalid form never leaves the process. On success the
    /// opaque session token is returned.
    ///
    /// # Errors
    ///
    /// Returns a pre-validation error (invalid email shape, empty
    /// password), a classified rejection for non-success statuses, a
    /// network error when no response was received, or `MissingToken` for
    /// a success response without a token.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let email = Email::parse(email.trim())?;
        let password = password.trim();
        if password.is_empty() {
            return Err(AuthError::MissingPassword);
        }

        let url = format!("{}/login", self.inner.base_url);
        let response = self
            .inner
            .client
            .post(&url)
            .header("x-api-key", self.inner.api_key.expose_secret())
            .json(&LoginRequest {
                email: email.as_str(),
                password,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Tolerate non-JSON error bodies; classification falls back to
            // the status code alone.
            let body: ErrorBody = response.json().await.unwrap_or_default();
            let err = AuthError::from_status(status.as_u16(), &body);
            if matches!(err, AuthError::ApiKeyRejected) {
                tracing::error!(status = %status, "Auth API rejected the configured API key");
            } else {
                tracing::warn!(status = %status, "Login rejected");
            }
            return Err(err);
        }

        let body: LoginResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse login response");
            AuthError::MissingToken
        })?;

        body.token.ok_or(AuthError::MissingToken)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{AuthApiConfig, DEFAULT_AUTH_API_KEY, DEFAULT_AUTH_API_URL};

    fn client() -> AuthClient {
        AuthClient::new(&AuthApiConfig {
            base_url: DEFAULT_AUTH_API_URL.to_string(),
            api_key: SecretString::from(DEFAULT_AUTH_API_KEY),
        })
    }

    // Pre-validation rejects bad input before any request is issued, so
    // these tests never touch the network.

    #[tokio::test]
    async fn test_login_rejects_invalid_email_shape() {
        let err = client().login("not-an-email", "secret").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));
    }

    #[tokio::test]
    async fn test_login_rejects_empty_password() {
        let err = client().login("user@example.com", "   ").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingPassword));
    }

    #[tokio::test]
    async fn test_login_trims_email_before_validation() {
        // Leading/trailing whitespace is trimmed, not rejected
        let err = client().login("  not-an-email  ", "x").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));
    }
}
