//! Authentication error types and user-facing messages.

use thiserror::Error;

use super::{DEMO_EMAIL, DEMO_PASSWORD};

/// Body shape of an error response from the auth stub API.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// The auth stub's marker for a request rejected at the API-key layer.
const MISSING_API_KEY_ERROR: &str = "Missing API key.";

/// Errors that can occur during a login attempt.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email failed the pre-submit shape check.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] techvibe_core::EmailError),

    /// Password was empty after trimming.
    #[error("password is required")]
    MissingPassword,

    /// The API rejected the request format (HTTP 400).
    #[error("invalid email or password format")]
    InvalidFormat,

    /// The API rejected the credentials (HTTP 401).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The API rejected our API key rather than the user's credentials
    /// (HTTP 401 with the missing-key marker body).
    #[error("auth API rejected the API key")]
    ApiKeyRejected,

    /// Any other non-success status.
    #[error("auth API returned status {0}")]
    Server(u16),

    /// Transport failure: no response was received at all.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response without a `token` field.
    #[error("login response did not contain a token")]
    MissingToken,
}

impl AuthError {
    /// Classify a non-success response by status code and body.
    ///
    /// A 401 normally means wrong credentials, but the stub API also
    /// answers 401 when the `x-api-key` header is rejected; that case must
    /// not surface the demo-credential hint.
    #[must_use]
    pub fn from_status(status: u16, body: &ErrorBody) -> Self {
        match status {
            400 => Self::InvalidFormat,
            401 if body.error.as_deref() == Some(MISSING_API_KEY_ERROR) => Self::ApiKeyRejected,
            401 => Self::InvalidCredentials,
            other => Self::Server(other),
        }
    }

    /// The message shown on the login page for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidEmail(_) => "Please enter a valid email address".to_string(),
            Self::MissingPassword => "Password is required".to_string(),
            Self::InvalidFormat => "Invalid email or password format".to_string(),
            Self::InvalidCredentials => format!(
                "Use these credentials to login:\nEmail: {DEMO_EMAIL}\nPassword: {DEMO_PASSWORD}"
            ),
            Self::ApiKeyRejected => "Authentication error. Please try again later.".to_string(),
            Self::Server(_) | Self::MissingToken => {
                "An error occurred. Please try again later".to_string()
            }
            Self::Network(_) => "Network error. Please check your internet connection".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_400_maps_to_format_error() {
        let err = AuthError::from_status(400, &ErrorBody::default());
        assert!(matches!(err, AuthError::InvalidFormat));
        assert_eq!(err.user_message(), "Invalid email or password format");
    }

    #[test]
    fn test_plain_401_surfaces_demo_credentials() {
        let body = ErrorBody {
            error: Some("user not found".to_string()),
        };
        let err = AuthError::from_status(401, &body);
        assert!(matches!(err, AuthError::InvalidCredentials));

        let message = err.user_message();
        assert!(message.contains(DEMO_EMAIL));
        assert!(message.contains(DEMO_PASSWORD));
    }

    #[test]
    fn test_401_missing_api_key_hides_demo_credentials() {
        let body = ErrorBody {
            error: Some("Missing API key.".to_string()),
        };
        let err = AuthError::from_status(401, &body);
        assert!(matches!(err, AuthError::ApiKeyRejected));

        let message = err.user_message();
        assert_eq!(message, "Authentication error. Please try again later.");
        assert!(!message.contains(DEMO_EMAIL));
    }

    #[test]
    fn test_401_without_body_surfaces_demo_credentials() {
        let err = AuthError::from_status(401, &ErrorBody::default());
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_other_statuses_get_generic_message() {
        for status in [403, 404, 500, 503] {
            let err = AuthError::from_status(status, &ErrorBody::default());
            assert!(matches!(err, AuthError::Server(s) if s == status));
            assert_eq!(
                err.user_message(),
                "An error occurred. Please try again later"
            );
        }
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            AuthError::MissingPassword.user_message(),
            "Password is required"
        );
        let err = AuthError::InvalidEmail(
            techvibe_core::Email::parse("not-an-email").unwrap_err(),
        );
        assert_eq!(err.user_message(), "Please enter a valid email address");
    }
}
