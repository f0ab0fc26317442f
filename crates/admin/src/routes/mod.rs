//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Submit credentials
//! POST /auth/logout            - Logout (flushes the session)
//!
//! # Dashboard
//! GET  /                       - Analytics overview
//!
//! # Products
//! GET  /products               - Product listing (derived locally)
//! GET  /products/new           - New product form
//! POST /products/new           - Create product (multipart)
//! GET  /products/{id}/edit     - Inventory edit form
//! POST /products/{id}/edit     - Update inventory
//! POST /products/{id}/delete   - Remove product
//!
//! # Inventory
//! GET  /inventory              - Low stock overview
//!
//! # Orders
//! GET  /orders                 - Order listing (server-side filters)
//! POST /orders/{id}/status     - Update order status
//! POST /orders/bulk-status     - Update several orders
//! GET  /orders/export          - Spreadsheet download
//!
//! # Coupons
//! GET  /coupons                - Coupon listing (derived locally)
//! GET  /coupons/new            - New coupon form
//! POST /coupons/new            - Create coupon
//! GET  /coupons/{id}/edit      - Edit coupon form
//! POST /coupons/{id}/edit      - Update coupon
//! POST /coupons/{id}/toggle    - Toggle active flag
//! POST /coupons/{id}/delete    - Delete coupon
//!
//! # Reviews
//! GET  /reviews                - Review listing
//! POST /reviews/{id}/status    - Approve / unapprove
//! POST /reviews/{id}/reply     - Post admin reply
//! POST /reviews/{id}/reply/delete - Remove admin reply
//! ```

use askama::Template;
use axum::{
    Router,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_sessions::Session;

use marigold_client::ApiError;

use crate::{middleware::auth::clear_current_admin, state::AppState};

pub mod auth;
pub mod coupons;
pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod reviews;

/// Build the admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        // Auth
        .route("/auth/login", get(auth::login_page).post(auth::login))
        .route("/auth/logout", post(auth::logout))
        // Products
        .route("/products", get(products::index))
        .route("/products/new", get(products::new_product).post(products::create))
        .route("/products/{id}/edit", get(products::edit).post(products::update_stock))
        .route("/products/{id}/delete", post(products::remove))
        // Inventory
        .route("/inventory", get(inventory::index))
        // Orders
        .route("/orders", get(orders::list::index))
        .route("/orders/export", get(orders::export::download))
        .route("/orders/bulk-status", post(orders::actions::bulk_update_status))
        .route("/orders/{id}/status", post(orders::actions::update_status))
        // Coupons
        .route("/coupons", get(coupons::index))
        .route("/coupons/new", get(coupons::new_coupon).post(coupons::create))
        .route("/coupons/{id}/edit", get(coupons::edit).post(coupons::update))
        .route("/coupons/{id}/toggle", post(coupons::toggle))
        .route("/coupons/{id}/delete", post(coupons::remove))
        // Reviews
        .route("/reviews", get(reviews::index))
        .route("/reviews/{id}/status", post(reviews::set_status))
        .route("/reviews/{id}/reply", post(reviews::reply))
        .route("/reviews/{id}/reply/delete", post(reviews::delete_reply))
}

/// Render a template, falling back to a plain 500 body on failure.
pub(crate) fn render<T: Template>(template: &T) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        "Internal Server Error".to_string()
    }))
}

/// Handle an invalid or expired API session: clear the stored session and
/// send the admin back to the login page. Returns `None` for every other
/// failure class so the caller can surface it in place.
pub(crate) async fn auth_guard(session: &Session, err: &ApiError) -> Option<Response> {
    if !err.is_auth() {
        return None;
    }
    if let Err(flush_err) = clear_current_admin(session).await {
        tracing::warn!("Failed to clear session after auth failure: {flush_err}");
    }
    tracing::info!("API session rejected, forcing re-login");
    Some(Redirect::to("/auth/login").into_response())
}
