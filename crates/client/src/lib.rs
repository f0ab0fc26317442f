//! Marigold Admin API client.
//!
//! A typed client for the Marigold admin REST API. Every resource the
//! admin panel manages (products, orders, coupons, reviews, analytics)
//! lives behind this API; the client normalizes the shared response
//! envelope `{success, message?, ...data}` into typed values or a typed
//! failure.
//!
//! # Authentication
//!
//! [`AdminApi::login`] exchanges admin credentials for a session token.
//! Every other call takes an explicit [`ApiSession`] and attaches the
//! token in the `token` request header - there is no ambient global
//! session, so the caller always knows which session a call runs under.
//!
//! # Errors
//!
//! Failures are classified so callers can distinguish "log in again"
//! ([`ApiError::Auth`]) from "fix your input" ([`ApiError::Validation`])
//! from "try later" ([`ApiError::Server`] / [`ApiError::Transport`]).
//! Expected rejections never panic; only transport and decoding failures
//! originate outside the envelope.
//!
//! # Example
//!
//! ```rust,ignore
//! use marigold_client::AdminApi;
//!
//! let api = AdminApi::new("https://api.marigoldapparel.com")?;
//! let session = api.login("admin@marigoldapparel.com", "password").await?;
//!
//! let products = api.list_products(&session).await?;
//! let orders = api.list_orders(&session, &Default::default()).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod api;
mod envelope;
mod session;
pub mod types;

pub use api::AdminApi;
pub use session::ApiSession;
pub use types::*;

use thiserror::Error;

/// Header carrying the session token on every authenticated request.
pub const TOKEN_HEADER: &str = "token";

/// Errors that can occur when calling the Marigold admin API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The session token is missing, invalid, or expired (401/403).
    ///
    /// Callers should clear the stored session and force re-login.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The server rejected the request on business rules (e.g. an invalid
    /// status transition or a duplicate coupon code).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The referenced entity no longer exists (stale id).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server failed (5xx).
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, if any.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API base URL is not a valid URL.
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Whether this failure should clear the stored session.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
