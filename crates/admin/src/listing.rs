//! List derivation pipelines for the admin list pages.
//!
//! Products and coupons arrive from the API as full collections; each
//! page view is derived locally in a fixed order: free-text search,
//! categorical filters, sort, paginate. Orders are server-paginated, so
//! the order derivation here is used where a fully fetched set is
//! filtered locally (the spreadsheet export) and by tests.
//!
//! Derivations are pure: same collection + same query = same page, with
//! no hidden state, so they are re-run on every change of collection,
//! filter, sort, or page.

use chrono::{DateTime, Utc};
use marigold_client::{Coupon, Order, Product};
use marigold_core::listing::{PageWindow, SortDirection, cmp_ci, matches_search};
use marigold_core::{CouponStatus, OrderStatus, PaymentStatus, StockStatus};
use serde::Deserialize;

/// Default page size for the derived list pages.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One derived page of a list view.
#[derive(Debug, Clone)]
pub struct DerivedPage<T> {
    /// The visible items, in display order.
    pub items: Vec<T>,
    /// Effective page (1-based), after out-of-range reset.
    pub page: usize,
    /// Total page count, always at least 1.
    pub total_pages: usize,
}

/// Treat absent and empty/blank query parameters the same.
fn non_empty(param: Option<&String>) -> Option<&str> {
    param.map(String::as_str).map(str::trim).filter(|s| !s.is_empty())
}

// =============================================================================
// Products
// =============================================================================

/// Query state for the products list page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListQuery {
    /// Free-text search over name and category.
    pub search: Option<String>,
    /// Exact category filter.
    pub category: Option<String>,
    /// Stock bucket filter (`in-stock`, `low-stock`, `out-of-stock`).
    pub stock: Option<String>,
    /// Sort key (`name`, `category`, `price`, `stock`).
    pub sort: Option<String>,
    /// Sort direction (`asc`/`desc`).
    pub dir: Option<String>,
    /// Page number (1-based).
    pub page: Option<usize>,
    /// Page size override.
    pub page_size: Option<usize>,
}

fn parse_stock_filter(param: &str) -> Option<StockStatus> {
    match param {
        "out-of-stock" => Some(StockStatus::OutOfStock),
        "low-stock" => Some(StockStatus::LowStock),
        "in-stock" => Some(StockStatus::InStock),
        _ => None,
    }
}

/// Derive the visible products page.
#[must_use]
pub fn derive_products(products: &[Product], query: &ProductListQuery) -> DerivedPage<Product> {
    let search = non_empty(query.search.as_ref()).unwrap_or_default();
    let category = non_empty(query.category.as_ref());
    let stock = non_empty(query.stock.as_ref()).and_then(parse_stock_filter);

    let mut filtered: Vec<&Product> = products
        .iter()
        .filter(|p| matches_search(search, &[&p.name, &p.category]))
        .filter(|p| category.is_none_or(|c| p.category.eq_ignore_ascii_case(c)))
        .filter(|p| stock.is_none_or(|s| p.stock_status() == s))
        .collect();

    let dir = SortDirection::from_param(query.dir.as_deref());
    match non_empty(query.sort.as_ref()).unwrap_or("name") {
        "category" => filtered.sort_by(|a, b| dir.apply(cmp_ci(&a.category, &b.category))),
        "price" => filtered.sort_by(|a, b| dir.apply(a.price.cmp(&b.price))),
        "stock" => filtered.sort_by(|a, b| {
            dir.apply(a.inventory.available.cmp(&b.inventory.available))
        }),
        _ => filtered.sort_by(|a, b| dir.apply(cmp_ci(&a.name, &b.name))),
    }

    paginate(filtered, query.page, query.page_size)
}

// =============================================================================
// Coupons
// =============================================================================

/// Query state for the coupons list page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CouponListQuery {
    /// Free-text search over code and description.
    pub search: Option<String>,
    /// Derived temporal status filter (`active`, `inactive`, `expired`,
    /// `scheduled`).
    pub status: Option<String>,
    /// Sort key (`code`, `value`, `used`, `validUntil`).
    pub sort: Option<String>,
    /// Sort direction (`asc`/`desc`).
    pub dir: Option<String>,
    /// Page number (1-based).
    pub page: Option<usize>,
    /// Page size override.
    pub page_size: Option<usize>,
}

fn parse_coupon_status(param: &str) -> Option<CouponStatus> {
    match param {
        "active" => Some(CouponStatus::Active),
        "inactive" => Some(CouponStatus::Inactive),
        "expired" => Some(CouponStatus::Expired),
        "scheduled" => Some(CouponStatus::Scheduled),
        _ => None,
    }
}

/// Derive the visible coupons page at `now`.
///
/// `now` is an argument so the temporal bucket is testable; callers pass
/// `Utc::now()`.
#[must_use]
pub fn derive_coupons(
    coupons: &[Coupon],
    query: &CouponListQuery,
    now: DateTime<Utc>,
) -> DerivedPage<Coupon> {
    let search = non_empty(query.search.as_ref()).unwrap_or_default();
    let status = non_empty(query.status.as_ref()).and_then(parse_coupon_status);

    let mut filtered: Vec<&Coupon> = coupons
        .iter()
        .filter(|c| matches_search(search, &[&c.code, &c.description]))
        .filter(|c| status.is_none_or(|s| c.status(now) == s))
        .collect();

    let dir = SortDirection::from_param(query.dir.as_deref());
    match non_empty(query.sort.as_ref()).unwrap_or("code") {
        "value" => filtered.sort_by(|a, b| dir.apply(a.value.cmp(&b.value))),
        "used" => filtered.sort_by(|a, b| dir.apply(a.used_count.cmp(&b.used_count))),
        "validUntil" => filtered.sort_by(|a, b| dir.apply(a.valid_until.cmp(&b.valid_until))),
        _ => filtered.sort_by(|a, b| dir.apply(cmp_ci(&a.code, &b.code))),
    }

    paginate(filtered, query.page, query.page_size)
}

// =============================================================================
// Orders (local derivation, used by export and tests)
// =============================================================================

/// Query state for a locally derived order list.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    /// Free-text search over order number and customer name.
    pub search: Option<String>,
    /// Exact status filter.
    pub status: Option<OrderStatus>,
    /// Exact payment status filter.
    pub payment_status: Option<PaymentStatus>,
    /// Sort key (`createdAt`, `orderNumber`, `total`).
    pub sort: Option<String>,
    /// Sort direction (`asc`/`desc`).
    pub dir: Option<String>,
    /// Page number (1-based).
    pub page: Option<usize>,
    /// Page size override.
    pub page_size: Option<usize>,
}

/// Derive the visible orders page from a fully fetched set.
#[must_use]
pub fn derive_orders(orders: &[Order], query: &OrderListQuery) -> DerivedPage<Order> {
    let search = non_empty(query.search.as_ref()).unwrap_or_default();

    let mut filtered: Vec<&Order> = orders
        .iter()
        .filter(|o| matches_search(search, &[&o.order_number, &o.customer_name()]))
        .filter(|o| query.status.is_none_or(|s| o.status == s))
        .filter(|o| query.payment_status.is_none_or(|p| o.payment_status == p))
        .collect();

    let dir = SortDirection::from_param(query.dir.as_deref());
    match non_empty(query.sort.as_ref()).unwrap_or("createdAt") {
        "orderNumber" => {
            filtered.sort_by(|a, b| dir.apply(cmp_ci(&a.order_number, &b.order_number)));
        }
        "total" => filtered.sort_by(|a, b| dir.apply(a.total.cmp(&b.total))),
        _ => filtered.sort_by(|a, b| dir.apply(a.created_at.cmp(&b.created_at))),
    }

    paginate(filtered, query.page, query.page_size)
}

// =============================================================================
// Shared
// =============================================================================

fn paginate<T: Clone>(
    filtered: Vec<&T>,
    page: Option<usize>,
    page_size: Option<usize>,
) -> DerivedPage<T> {
    let window = PageWindow::compute(
        filtered.len(),
        page.unwrap_or(1),
        page_size.unwrap_or(DEFAULT_PAGE_SIZE),
    );
    let items = filtered
        .into_iter()
        .skip(window.start)
        .take(window.end - window.start)
        .cloned()
        .collect();
    DerivedPage {
        items,
        page: window.page,
        total_pages: window.total_pages,
    }
}
