//! Order list spreadsheet download.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use marigold_client::{Order, OrderListParams};

use crate::{
    error::AppError,
    export::{export_file_name, orders_to_xlsx},
    listing::{OrderListQuery, derive_orders},
    middleware::auth::RequireAdminAuth,
    routes::auth_guard,
    state::AppState,
};

use super::types::OrdersQuery;

/// Page size used when draining the order list for export.
const EXPORT_FETCH_LIMIT: u32 = 100;

/// Upper bound on drained pages; exports past this are truncated rather
/// than hammering the API.
const EXPORT_MAX_PAGES: u32 = 50;

/// Fetch every page of orders matching the filters.
async fn fetch_all_orders(
    state: &AppState,
    session: &marigold_client::ApiSession,
    query: &OrdersQuery,
) -> Result<Vec<Order>, marigold_client::ApiError> {
    let mut all = Vec::new();
    let mut page = 1;

    loop {
        let params = OrderListParams {
            limit: Some(EXPORT_FETCH_LIMIT),
            page: Some(page),
            ..query.to_list_params()
        };
        let batch = state.api().list_orders(session, &params).await?;
        all.extend(batch.orders);

        if page >= batch.pagination.total_pages || page >= EXPORT_MAX_PAGES {
            if page >= EXPORT_MAX_PAGES && page < batch.pagination.total_pages {
                tracing::warn!(
                    fetched_pages = page,
                    total_pages = batch.pagination.total_pages,
                    "Order export truncated at page cap"
                );
            }
            return Ok(all);
        }
        page += 1;
    }
}

/// Spreadsheet download handler.
///
/// Drains the filtered order list from the API, derives the final
/// ordering locally (oldest first), and streams back an `.xlsx` file.
#[instrument(skip(admin, state, session))]
pub async fn download(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<OrdersQuery>,
) -> Response {
    let api_session = admin.api_session();
    let orders = match fetch_all_orders(&state, &api_session, &query).await {
        Ok(orders) => orders,
        Err(err) => {
            if let Some(response) = auth_guard(&session, &err).await {
                return response;
            }
            tracing::error!("Failed to fetch orders for export: {err}");
            return AppError::Api(err).into_response();
        }
    };

    // The API already applied the filters; the local pipeline settles the
    // row order for the sheet.
    let derive_query = OrderListQuery {
        search: query.search.clone(),
        sort: Some("createdAt".to_string()),
        page_size: Some(orders.len().max(1)),
        ..OrderListQuery::default()
    };
    let page = derive_orders(&orders, &derive_query);

    match orders_to_xlsx(&page.items) {
        Ok(bytes) => {
            let file_name = export_file_name(chrono::Utc::now().date_naive());
            tracing::info!(rows = page.items.len(), file = %file_name, "Order export generated");
            (
                [
                    (
                        header::CONTENT_TYPE,
                        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
                            .to_string(),
                    ),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{file_name}\""),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("Failed to build export workbook: {err}");
            AppError::Internal(err.to_string()).into_response()
        }
    }
}
