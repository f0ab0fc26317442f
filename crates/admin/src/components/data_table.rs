//! Data table component types.
//!
//! These types define the configuration for the admin list pages: which
//! columns a table shows (and which are sortable) and which filters it
//! offers. Templates iterate the configuration instead of hardcoding
//! per-page filter markup.

use marigold_core::{CouponStatus, OrderStatus, PaymentStatus, StockStatus};

/// Column definition for a data table.
#[derive(Debug, Clone)]
pub struct TableColumn {
    /// Unique key for the column, used as the sort parameter.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column is sortable.
    pub sortable: bool,
}

impl TableColumn {
    /// Create a new sortable column.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: true,
        }
    }

    /// Create a new non-sortable column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
        }
    }
}

/// Option for select filters.
#[derive(Debug, Clone)]
pub struct FilterOption {
    /// Option value, as sent in the query string.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl FilterOption {
    /// Create a new filter option.
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A single-select filter on a data table.
#[derive(Debug, Clone)]
pub struct TableFilter {
    /// Filter parameter key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Available options; the empty value ("All") is added by the template.
    pub options: Vec<FilterOption>,
}

impl TableFilter {
    /// Create a select filter.
    #[must_use]
    pub fn select(key: &str, label: &str, options: Vec<FilterOption>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            options,
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Filter definitions.
    pub filters: Vec<TableFilter>,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Title for empty state.
    pub empty_title: String,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            filters: vec![],
            search_placeholder: "Search...".to_string(),
            empty_title: "No items found".to_string(),
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set empty state title.
    #[must_use]
    pub fn empty_title(mut self, title: &str) -> Self {
        self.empty_title = title.to_string();
        self
    }
}

/// Filter options for every order status.
fn order_status_options() -> Vec<FilterOption> {
    OrderStatus::ALL
        .iter()
        .map(|status| FilterOption::new(status.as_str(), status.label()))
        .collect()
}

/// Build the products table configuration.
#[must_use]
pub fn products_table_config() -> DataTableConfig {
    DataTableConfig::new("products")
        .column(TableColumn::sortable("name", "Product"))
        .column(TableColumn::sortable("category", "Category"))
        .column(TableColumn::sortable("price", "Price"))
        .column(TableColumn::new("sizes", "Sizes"))
        .column(TableColumn::sortable("stock", "Stock"))
        .column(TableColumn::new("actions", "Actions"))
        .filter(TableFilter::select(
            "category",
            "Category",
            vec![
                FilterOption::new("Men", "Men"),
                FilterOption::new("Women", "Women"),
                FilterOption::new("Kids", "Kids"),
            ],
        ))
        .filter(TableFilter::select(
            "stock",
            "Stock",
            vec![
                FilterOption::new(StockStatus::InStock.as_str(), StockStatus::InStock.label()),
                FilterOption::new(StockStatus::LowStock.as_str(), StockStatus::LowStock.label()),
                FilterOption::new(
                    StockStatus::OutOfStock.as_str(),
                    StockStatus::OutOfStock.label(),
                ),
            ],
        ))
        .search_placeholder("Search products by name or category...")
        .empty_title("No products found")
}

/// Build the orders table configuration.
#[must_use]
pub fn orders_table_config() -> DataTableConfig {
    DataTableConfig::new("orders")
        .column(TableColumn::sortable("orderNumber", "Order"))
        .column(TableColumn::sortable("createdAt", "Date"))
        .column(TableColumn::new("customer", "Customer"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("payment", "Payment"))
        .column(TableColumn::new("items", "Items"))
        .column(TableColumn::sortable("total", "Total"))
        .column(TableColumn::new("actions", "Actions"))
        .filter(TableFilter::select("status", "Status", order_status_options()))
        .filter(TableFilter::select(
            "payment_status",
            "Payment",
            vec![
                FilterOption::new(PaymentStatus::Pending.as_str(), PaymentStatus::Pending.label()),
                FilterOption::new(PaymentStatus::Paid.as_str(), PaymentStatus::Paid.label()),
                FilterOption::new(PaymentStatus::Failed.as_str(), PaymentStatus::Failed.label()),
                FilterOption::new(
                    PaymentStatus::Refunded.as_str(),
                    PaymentStatus::Refunded.label(),
                ),
            ],
        ))
        .search_placeholder("Search by order number or customer...")
        .empty_title("No orders found")
}

/// Build the coupons table configuration.
#[must_use]
pub fn coupons_table_config() -> DataTableConfig {
    DataTableConfig::new("coupons")
        .column(TableColumn::sortable("code", "Code"))
        .column(TableColumn::new("kind", "Type"))
        .column(TableColumn::sortable("value", "Value"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::sortable("used", "Usage"))
        .column(TableColumn::sortable("validUntil", "Valid Until"))
        .column(TableColumn::new("actions", "Actions"))
        .filter(TableFilter::select(
            "status",
            "Status",
            vec![
                FilterOption::new(CouponStatus::Active.as_str(), CouponStatus::Active.label()),
                FilterOption::new(CouponStatus::Inactive.as_str(), CouponStatus::Inactive.label()),
                FilterOption::new(CouponStatus::Expired.as_str(), CouponStatus::Expired.label()),
                FilterOption::new(
                    CouponStatus::Scheduled.as_str(),
                    CouponStatus::Scheduled.label(),
                ),
            ],
        ))
        .search_placeholder("Search by code or description...")
        .empty_title("No coupons found")
}

/// Build the reviews table configuration.
#[must_use]
pub fn reviews_table_config() -> DataTableConfig {
    DataTableConfig::new("reviews")
        .column(TableColumn::new("product", "Product"))
        .column(TableColumn::new("rating", "Rating"))
        .column(TableColumn::new("review", "Review"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("reply", "Reply"))
        .column(TableColumn::new("actions", "Actions"))
        .filter(TableFilter::select(
            "status",
            "Status",
            vec![
                FilterOption::new("pending", "Pending"),
                FilterOption::new("approved", "Approved"),
            ],
        ))
        .empty_title("No reviews found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_columns_and_filters() {
        let config = products_table_config();
        assert_eq!(config.table_id, "products");
        assert!(config.columns.iter().any(|c| c.key == "stock" && c.sortable));
        assert_eq!(config.filters.len(), 2);
    }

    #[test]
    fn test_order_status_filter_covers_all_statuses() {
        let config = orders_table_config();
        let status_filter = config
            .filters
            .iter()
            .find(|f| f.key == "status")
            .expect("status filter");
        assert_eq!(status_filter.options.len(), OrderStatus::ALL.len());
    }
}
