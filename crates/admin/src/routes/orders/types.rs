//! Type definitions and conversions for order views.

use serde::Deserialize;

use marigold_client::{Order, OrderListParams};
use marigold_core::{OrderStatus, PaymentStatus};

/// Page size for the orders list.
pub const ORDER_PAGE_SIZE: u32 = 10;

// =============================================================================
// Query Parameters
// =============================================================================

/// Query parameters for the orders list with filtering, sorting, and
/// pagination. These are passed through to the API, which owns order
/// pagination.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrdersQuery {
    /// Free-text search query.
    pub search: Option<String>,
    /// Status filter.
    pub status: Option<String>,
    /// Payment status filter.
    pub payment_status: Option<String>,
    /// Created date from (YYYY-MM-DD).
    pub date_from: Option<String>,
    /// Created date to (YYYY-MM-DD).
    pub date_to: Option<String>,
    /// Sort column key.
    pub sort: Option<String>,
    /// Sort direction (asc/desc).
    pub dir: Option<String>,
    /// Page number (1-based).
    pub page: Option<u32>,
}

impl OrdersQuery {
    /// Build the API list parameters from the page query.
    ///
    /// Unknown status and date values are dropped rather than rejected,
    /// matching how the filter selects are built.
    #[must_use]
    pub fn to_list_params(&self) -> OrderListParams {
        let non_empty = |param: &Option<String>| {
            param
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let sort = non_empty(&self.sort).map(|key| {
            if self.dir.as_deref() == Some("desc") {
                format!("-{key}")
            } else {
                key
            }
        });

        OrderListParams {
            sort,
            page: self.page,
            limit: Some(ORDER_PAGE_SIZE),
            search: non_empty(&self.search),
            status: non_empty(&self.status).and_then(|s| s.parse::<OrderStatus>().ok()),
            payment_status: non_empty(&self.payment_status)
                .and_then(|s| s.parse::<PaymentStatus>().ok()),
            date_from: non_empty(&self.date_from).and_then(|s| s.parse().ok()),
            date_to: non_empty(&self.date_to).and_then(|s| s.parse().ok()),
        }
    }
}

/// Build URL parameters for preserving filters across pagination.
#[must_use]
pub fn build_preserve_params(query: &OrdersQuery) -> String {
    let mut params = Vec::new();

    if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
        params.push(format!("search={}", urlencoding::encode(search)));
    }
    // Note: sort and dir are intentionally excluded here because they are
    // set explicitly in the sort column header links.
    if let Some(status) = query.status.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("status={status}"));
    }
    if let Some(payment) = query.payment_status.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("payment_status={payment}"));
    }
    if let Some(from) = query.date_from.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("date_from={from}"));
    }
    if let Some(to) = query.date_to.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("date_to={to}"));
    }

    if params.is_empty() {
        String::new()
    } else {
        format!("&{}", params.join("&"))
    }
}

// =============================================================================
// Table View Types
// =============================================================================

/// One option in a status selector.
#[derive(Debug, Clone)]
pub struct StatusOptionView {
    pub value: String,
    pub label: String,
}

impl From<OrderStatus> for StatusOptionView {
    fn from(status: OrderStatus) -> Self {
        Self {
            value: status.as_str().to_string(),
            label: status.label().to_string(),
        }
    }
}

/// Every status, for the bulk-update selector.
#[must_use]
pub fn all_status_options() -> Vec<StatusOptionView> {
    OrderStatus::ALL.iter().copied().map(Into::into).collect()
}

/// Order view for the list table.
#[derive(Debug, Clone)]
pub struct OrderRowView {
    pub id: String,
    pub order_number: String,
    pub created_at: String,
    pub customer_name: String,
    pub status: String,
    pub status_value: String,
    pub payment_status: String,
    pub item_count: i64,
    pub total: String,
    /// The current status plus its legal successors; the selector never
    /// offers an illegal transition.
    pub status_options: Vec<StatusOptionView>,
    pub is_terminal: bool,
}

impl From<&Order> for OrderRowView {
    fn from(order: &Order) -> Self {
        let status_options = std::iter::once(order.status)
            .chain(order.status.successors().iter().copied())
            .map(StatusOptionView::from)
            .collect();

        Self {
            id: order.id.clone(),
            order_number: order.order_number.clone(),
            created_at: order.created_at.format("%Y-%m-%d %H:%M").to_string(),
            customer_name: order.customer_name(),
            status: order.status.label().to_string(),
            status_value: order.status.as_str().to_string(),
            payment_status: order.payment_status.label().to_string(),
            item_count: order.items.iter().map(|item| item.quantity).sum(),
            total: format!("${:.2}", order.total),
            status_options,
            is_terminal: order.status.is_terminal(),
        }
    }
}
