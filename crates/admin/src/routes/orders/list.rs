//! Orders list page handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    components::data_table::{DataTableConfig, orders_table_config},
    middleware::auth::RequireAdminAuth,
    models::CurrentAdmin,
    routes::{auth_guard, render},
    state::AppState,
};

use super::types::{
    OrderRowView, OrdersQuery, StatusOptionView, all_status_options, build_preserve_params,
};

/// Orders list page template.
#[derive(Template)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub admin_email: String,
    pub error: Option<String>,
    pub config: DataTableConfig,
    pub rows: Vec<OrderRowView>,
    pub bulk_status_options: Vec<StatusOptionView>,
    pub search_value: String,
    pub status_value: String,
    pub payment_value: String,
    pub date_from: String,
    pub date_to: String,
    pub sort_value: String,
    pub next_dir: String,
    pub preserve_params: String,
    pub page: u32,
    pub total_pages: u32,
    pub prev_page: u32,
    pub next_page: u32,
}

/// Render the orders page with an optional error banner.
///
/// Shared with the status-update handlers, which re-render the list when
/// a change is rejected.
pub(crate) async fn render_index(
    state: &AppState,
    admin: &CurrentAdmin,
    session: &Session,
    query: &OrdersQuery,
    error: Option<String>,
) -> Response {
    let params = query.to_list_params();

    let (orders, pagination, error) = match state
        .api()
        .list_orders(&admin.api_session(), &params)
        .await
    {
        Ok(page) => (page.orders, page.pagination, error),
        Err(err) => {
            if let Some(response) = auth_guard(session, &err).await {
                return response;
            }
            tracing::error!("Failed to fetch orders: {err}");
            (
                vec![],
                marigold_client::PageMeta::default(),
                error.or_else(|| Some(err.to_string())),
            )
        }
    };

    let page = pagination.page.max(1);
    let total_pages = pagination.total_pages.max(1);

    let template = OrdersIndexTemplate {
        admin_email: admin.email.clone(),
        error,
        config: orders_table_config(),
        rows: orders.iter().map(OrderRowView::from).collect(),
        bulk_status_options: all_status_options(),
        search_value: query.search.clone().unwrap_or_default(),
        status_value: query.status.clone().unwrap_or_default(),
        payment_value: query.payment_status.clone().unwrap_or_default(),
        date_from: query.date_from.clone().unwrap_or_default(),
        date_to: query.date_to.clone().unwrap_or_default(),
        sort_value: query.sort.clone().unwrap_or_default(),
        next_dir: if query.dir.as_deref() == Some("asc") {
            "desc".to_string()
        } else {
            "asc".to_string()
        },
        preserve_params: build_preserve_params(query),
        page,
        total_pages,
        prev_page: page.saturating_sub(1).max(1),
        next_page: (page + 1).min(total_pages),
    };

    render(&template).into_response()
}

/// Orders list page handler.
#[instrument(skip(admin, state, session))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<OrdersQuery>,
) -> Response {
    render_index(&state, &admin, &session, &query, None).await
}
