//! Session token holder for authenticated API calls.

use secrecy::{ExposeSecret, SecretString};

/// An authenticated API session.
///
/// Wraps the token returned by [`crate::AdminApi::login`]. The token is
/// held as a secret and redacted from `Debug` output; it is exposed only
/// when building the request header or persisting the session.
///
/// The session is an explicit argument to every authenticated call
/// rather than client-internal state, so two admin sessions can share
/// one `AdminApi` without seeing each other's credentials.
#[derive(Clone)]
pub struct ApiSession {
    token: SecretString,
}

impl ApiSession {
    /// Create a session from a raw token (e.g. loaded from storage).
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }

    /// Expose the raw token, for the request header or durable storage.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.token.expose_secret()
    }
}

impl std::fmt::Debug for ApiSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSession")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let session = ApiSession::new("eyJhbGciOiJIUzI1NiJ9.secret-token");
        let debug_output = format!("{session:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("secret-token"));
    }

    #[test]
    fn test_expose_returns_token() {
        let session = ApiSession::new("abc123");
        assert_eq!(session.expose(), "abc123");
    }
}
