//! Order export command.

use thiserror::Error;

use marigold_admin::export::orders_to_xlsx;
use marigold_admin::listing::{OrderListQuery, derive_orders};
use marigold_client::{AdminApi, ApiError, Order, OrderListParams};
use marigold_core::{OrderStatus, PaymentStatus};

use super::session::{self, SessionError};

/// Page size used when draining the order list.
const FETCH_LIMIT: u32 = 100;

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Session missing or rejected.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// API request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A filter value could not be parsed.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Workbook assembly failed.
    #[error("Spreadsheet error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Writing the output file failed.
    #[error("Output file error: {0}")]
    Io(#[from] std::io::Error),
}

fn parse_filter<T: std::str::FromStr>(
    raw: Option<String>,
    what: &str,
) -> Result<Option<T>, ExportError> {
    raw.map(|value| {
        value
            .parse()
            .map_err(|_| ExportError::InvalidFilter(format!("{what}: {value}")))
    })
    .transpose()
}

/// Export orders matching the filters to an `.xlsx` file.
///
/// # Errors
///
/// Returns [`ExportError`] when not logged in, a filter is invalid, the
/// API rejects a request, or the file cannot be written.
pub async fn export(
    api: &AdminApi,
    output: &str,
    status: Option<String>,
    payment_status: Option<String>,
    date_from: Option<String>,
    date_to: Option<String>,
) -> Result<(), ExportError> {
    let api_session = session::load()?;

    let status: Option<OrderStatus> = parse_filter(status, "status")?;
    let payment_status: Option<PaymentStatus> = parse_filter(payment_status, "payment status")?;
    let date_from: Option<chrono::NaiveDate> = parse_filter(date_from, "date from")?;
    let date_to: Option<chrono::NaiveDate> = parse_filter(date_to, "date to")?;

    // Drain every page of the server-filtered list.
    let mut orders: Vec<Order> = Vec::new();
    let mut page = 1;
    loop {
        let params = OrderListParams {
            page: Some(page),
            limit: Some(FETCH_LIMIT),
            status,
            payment_status,
            date_from,
            date_to,
            ..OrderListParams::default()
        };
        let batch = api.list_orders(&api_session, &params).await?;
        orders.extend(batch.orders);
        if page >= batch.pagination.total_pages {
            break;
        }
        page += 1;
    }

    // Settle the row order locally, oldest first.
    let derive_query = OrderListQuery {
        sort: Some("createdAt".to_string()),
        page_size: Some(orders.len().max(1)),
        ..OrderListQuery::default()
    };
    let derived = derive_orders(&orders, &derive_query);

    let bytes = orders_to_xlsx(&derived.items)?;
    std::fs::write(output, bytes)?;

    tracing::info!("Exported {} orders to {output}", derived.items.len());
    Ok(())
}
