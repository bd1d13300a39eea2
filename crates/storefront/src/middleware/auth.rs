//! Route guard and session helpers.
//!
//! The guard checks only for the *presence* of a stored token; it does not
//! validate signature, expiry, or any server-side session state. This is
//! authentication-presence checking, not authentication - exactly what the
//! demo auth stub supports.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentShopper, session_keys};

/// Extractor that requires a logged-in shopper.
///
/// If no token is stored in the session, the request is redirected to the
/// login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(shopper): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", shopper.email)
/// }
/// ```
pub struct RequireAuth(pub CurrentShopper);

/// Rejection returned when no token is present.
pub struct RedirectToLogin;

impl IntoResponse for RedirectToLogin {
    fn into_response(self) -> Response {
        Redirect::to("/auth/login").into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = RedirectToLogin;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts.extensions.get::<Session>().ok_or(RedirectToLogin)?;

        let shopper: CurrentShopper = session
            .get(session_keys::CURRENT_SHOPPER)
            .await
            .ok()
            .flatten()
            .ok_or(RedirectToLogin)?;

        Ok(Self(shopper))
    }
}

/// Store the shopper (token + email) in the session after a login.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_shopper(
    session: &Session,
    shopper: &CurrentShopper,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::CURRENT_SHOPPER, shopper)
        .await
}

/// Remove the shopper from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_shopper(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentShopper>(session_keys::CURRENT_SHOPPER)
        .await?;
    Ok(())
}
