//! Middleware for the admin panel.

pub mod auth;
pub mod request_id;
pub mod session;

pub use auth::RequireAdminAuth;
pub use session::create_session_layer;
