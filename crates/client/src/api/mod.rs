//! The Marigold admin API client.
//!
//! [`AdminApi`] holds the HTTP client and base URL; the per-resource
//! method groups live in sibling modules (`auth`, `products`, `orders`,
//! `coupons`, `reviews`, `analytics`), each an `impl AdminApi` block.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{ApiError, ApiSession, TOKEN_HEADER, envelope::decode_envelope};

mod analytics;
mod auth;
mod coupons;
mod orders;
mod products;
mod reviews;

/// Client for the Marigold admin REST API.
///
/// Cheap to clone; all clones share one connection pool. The client
/// holds no session state - authenticated calls take an explicit
/// [`ApiSession`].
#[derive(Clone)]
pub struct AdminApi {
    inner: Arc<AdminApiInner>,
}

struct AdminApiInner {
    http: reqwest::Client,
    /// Base URL with no trailing slash.
    base_url: String,
}

impl AdminApi {
    /// Create a client for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BaseUrl`] if `base_url` is not a valid
    /// absolute URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        // Parse early so a bad URL fails at startup, not on first call.
        let parsed = Url::parse(base_url)?;
        Ok(Self {
            inner: Arc::new(AdminApiInner {
                http: reqwest::Client::new(),
                base_url: parsed.as_str().trim_end_matches('/').to_string(),
            }),
        })
    }

    /// The configured base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Build an unauthenticated request for `path` (must start with `/`).
    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.inner
            .http
            .request(method, format!("{}{path}", self.inner.base_url))
    }

    /// Build an authenticated request carrying the session token.
    pub(crate) fn authed(
        &self,
        method: Method,
        path: &str,
        session: &ApiSession,
    ) -> reqwest::RequestBuilder {
        self.request(method, path)
            .header(TOKEN_HEADER, session.expose())
    }

    /// Send a request and decode the envelope into `T`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        decode_envelope(status, &body)
    }
}
