//! Session-related types for admin authentication.
//!
//! Types stored in the session for authentication state.

use marigold_client::ApiSession;
use serde::{Deserialize, Serialize};

/// Session-stored admin identity.
///
/// Holds the email shown in the header and the API token obtained at
/// login. The token never appears in `Debug` output.
#[derive(Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's email address.
    pub email: String,
    /// Token for the Marigold API, issued by the login endpoint.
    token: String,
}

impl CurrentAdmin {
    /// Build the session record after a successful login.
    #[must_use]
    pub fn new(email: impl Into<String>, api_session: &ApiSession) -> Self {
        Self {
            email: email.into(),
            token: api_session.expose().to_string(),
        }
    }

    /// The API session for authenticated client calls.
    #[must_use]
    pub fn api_session(&self) -> ApiSession {
        ApiSession::new(self.token.clone())
    }
}

impl std::fmt::Debug for CurrentAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentAdmin")
            .field("email", &self.email)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Session keys for admin authentication data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let admin = CurrentAdmin::new("admin@marigoldapparel.com", &ApiSession::new("tok-123"));
        let debug_output = format!("{admin:?}");
        assert!(debug_output.contains("admin@marigoldapparel.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("tok-123"));
    }

    #[test]
    fn test_api_session_round_trips_token() {
        let admin = CurrentAdmin::new("a@b.c", &ApiSession::new("tok-456"));
        assert_eq!(admin.api_session().expose(), "tok-456");
    }
}
