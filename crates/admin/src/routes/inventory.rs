//! Low-stock inventory overview handler.

use askama::Template;
use axum::{extract::State, response::{IntoResponse, Response}};
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    middleware::auth::RequireAdminAuth,
    routes::{auth_guard, render},
    routes::products::ProductRowView,
    state::AppState,
};

/// Low-stock page template.
#[derive(Template)]
#[template(path = "inventory/index.html")]
pub struct InventoryIndexTemplate {
    pub admin_email: String,
    pub error: Option<String>,
    pub rows: Vec<ProductRowView>,
}

/// Low-stock overview handler.
///
/// Uses the dedicated low-stock endpoint rather than filtering the full
/// catalog, so the page matches what the API would restock-alert on.
#[instrument(skip(admin, state, session))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
) -> Response {
    let (products, error) = match state.api().low_stock_products(&admin.api_session()).await {
        Ok(products) => (products, None),
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!("Failed to fetch low stock products: {err}");
            (vec![], Some(err.to_string()))
        }
    };

    let template = InventoryIndexTemplate {
        admin_email: admin.email.clone(),
        error,
        rows: products.iter().map(ProductRowView::from).collect(),
    };

    render(&template).into_response()
}
