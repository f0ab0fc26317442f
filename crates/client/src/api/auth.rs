//! Admin authentication.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{AdminApi, ApiError, ApiSession};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
}

impl AdminApi {
    /// Log in with admin credentials and obtain a session.
    ///
    /// A rejected login (wrong credentials, not an admin account) is an
    /// [`ApiError::Auth`], not a panic; only transport failures originate
    /// outside the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Auth`] when the API rejects the credentials,
    /// or [`ApiError::Transport`] / [`ApiError::Decode`] on failure to
    /// reach or understand the API.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<ApiSession, ApiError> {
        let request = self
            .request(Method::POST, "/api/user/admin/login")
            .json(&LoginRequest { email, password });

        let data: LoginData = match self.execute(request).await {
            Ok(data) => data,
            // The login endpoint reports bad credentials through the
            // envelope with a non-auth status; normalize to Auth so the
            // caller has one failure class for "not signed in".
            Err(ApiError::Validation(message)) => return Err(ApiError::Auth(message)),
            Err(err) => return Err(err),
        };

        Ok(ApiSession::new(data.token))
    }
}
