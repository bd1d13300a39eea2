//! Session-related types.
//!
//! The session is the Rust analogue of the original client's browser-local
//! storage: a per-visitor key/value store holding the auth token and the
//! cart and favorites slices.

use serde::{Deserialize, Serialize};

/// Session-stored shopper identity.
///
/// The token is an opaque string from the auth stub; it is never validated
/// after login, only checked for presence by the route guard.
///
/// Implements `Debug` manually so the token never reaches the logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct CurrentShopper {
    /// Opaque session token from the auth API.
    pub token: String,
    /// The email the shopper logged in with.
    pub email: String,
}

impl std::fmt::Debug for CurrentShopper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentShopper")
            .field("token", &"[REDACTED]")
            .field("email", &self.email)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let shopper = CurrentShopper {
            token: "QpwL5tke4Pnpja7X4".to_string(),
            email: "eve.holt@reqres.in".to_string(),
        };

        let debug_output = format!("{shopper:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(debug_output.contains("eve.holt@reqres.in"));
        assert!(!debug_output.contains("QpwL5tke4Pnpja7X4"));
    }
}

/// Session keys for shopper state.
pub mod keys {
    /// Key for the logged-in shopper (token + email).
    pub const CURRENT_SHOPPER: &str = "current_shopper";

    /// Key for the cart slice.
    pub const CART: &str = "cart";

    /// Key for the favorites slice.
    pub const FAVORITES: &str = "favorites";
}
