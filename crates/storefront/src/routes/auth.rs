//! Authentication route handlers.
//!
//! The login flow is a four-state machine: anonymous, submitting (the POST
//! in flight), authenticated (token stored, redirect home), and error
//! (message rendered, always retriable). There is no terminal error state.

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

use crate::error::Result;
use crate::filters;
use crate::middleware::{clear_current_shopper, set_current_shopper};
use crate::models::CurrentShopper;
use crate::services::auth::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::state::AppState;

// =============================================================================
// Forms & Templates
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login page template.
///
/// The demo credentials are pre-filled so the stub API accepts the form
/// as-is; a failed attempt re-renders with the submitted values and the
/// error message.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    /// Error message; empty when there is nothing to show.
    pub error: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login page with pre-filled demo credentials.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate {
        error: String::new(),
        email: DEMO_EMAIL.to_string(),
        password: DEMO_PASSWORD.to_string(),
    }
}

/// Handle login form submission.
///
/// On success the token is stored in the session and the shopper lands on
/// the home page; on any failure the page re-renders with a message and
/// the attempt can be retried immediately.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match state.auth().login(&form.email, &form.password).await {
        Ok(token) => {
            let shopper = CurrentShopper {
                token,
                email: form.email.trim().to_string(),
            };
            set_current_shopper(&session, &shopper).await?;

            Ok(Redirect::to("/").into_response())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Login failed");
            Ok(LoginTemplate {
                error: e.user_message(),
                email: form.email,
                password: form.password,
            }
            .into_response())
        }
    }
}

/// Handle logout.
///
/// Clears the stored token and flushes the whole session: cart and
/// favorites do not survive a logout.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Response> {
    clear_current_shopper(&session).await?;
    session.flush().await?;

    Ok(Redirect::to("/auth/login").into_response())
}
