//! Order wire types, list parameters, and status mutation inputs.

use chrono::{DateTime, NaiveDate, Utc};
use marigold_core::{OrderStatus, PaymentStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{Address, PageMeta};

/// A line item within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product name at time of purchase.
    pub name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Selected size.
    #[serde(default)]
    pub size: String,
    /// Unit price at time of purchase.
    pub price: Decimal,
    /// Product image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// Shipping details for an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipping {
    /// Carrier tracking number.
    #[serde(default)]
    pub tracking_number: Option<String>,
    /// Carrier name.
    #[serde(default)]
    pub carrier: Option<String>,
    /// Estimated delivery date.
    #[serde(default)]
    pub estimated_delivery: Option<DateTime<Utc>>,
}

/// An order as returned by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id.
    pub id: String,
    /// Human-facing order number (e.g. "MG-10023").
    pub order_number: String,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Line items.
    pub items: Vec<OrderItem>,
    /// Shipping address.
    pub address: Address,
    /// Shipping details, populated once fulfillment starts.
    #[serde(default)]
    pub shipping: Shipping,
    /// Order total.
    pub total: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Customer display name, taken from the shipping address.
    #[must_use]
    pub fn customer_name(&self) -> String {
        self.address.display_name()
    }
}

/// One page of the server-paginated order list.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderListPage {
    /// Orders on this page.
    pub orders: Vec<Order>,
    /// Pagination metadata.
    pub pagination: PageMeta,
}

/// Query parameters for the admin order list.
///
/// The order list is server-paginated; these filters are passed through
/// to the API rather than applied locally.
#[derive(Debug, Clone, Default)]
pub struct OrderListParams {
    /// Sort key (e.g. `createdAt`, `total`), `-` prefix for descending.
    pub sort: Option<String>,
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Free-text search over order number and customer.
    pub search: Option<String>,
    /// Exact status filter.
    pub status: Option<OrderStatus>,
    /// Exact payment status filter.
    pub payment_status: Option<PaymentStatus>,
    /// Created-at lower bound.
    pub date_from: Option<NaiveDate>,
    /// Created-at upper bound.
    pub date_to: Option<NaiveDate>,
}

impl OrderListParams {
    /// Build the query string pairs for the list endpoint, skipping
    /// unset filters.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim)
            && !search.is_empty()
        {
            pairs.push(("search".to_string(), search.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.to_string()));
        }
        if let Some(payment_status) = self.payment_status {
            pairs.push(("paymentStatus".to_string(), payment_status.to_string()));
        }
        if let Some(from) = self.date_from {
            pairs.push(("dateFrom".to_string(), from.to_string()));
        }
        if let Some(to) = self.date_to {
            pairs.push(("dateTo".to_string(), to.to_string()));
        }
        pairs
    }
}

/// Input for updating a single order's status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateInput {
    /// Order id.
    pub order_id: String,
    /// The new status.
    pub status: OrderStatus,
    /// Tracking number, required by the workflow when shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    /// Carrier name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    /// Estimated delivery date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<NaiveDate>,
    /// Free-form note attached to the status change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Input for updating several orders' statuses at once.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStatusInput {
    /// Ids of the orders to update.
    pub order_ids: Vec<String>,
    /// The new status for all of them.
    pub status: OrderStatus,
    /// Free-form note attached to each change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Outcome of a bulk status update.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStatusOutcome {
    /// How many orders were updated.
    #[serde(default)]
    pub updated: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query_skips_unset_filters() {
        let params = OrderListParams::default();
        assert!(params.to_query().is_empty());
    }

    #[test]
    fn test_to_query_includes_set_filters() {
        let params = OrderListParams {
            sort: Some("-createdAt".to_string()),
            page: Some(2),
            limit: Some(20),
            search: Some("MG-10023".to_string()),
            status: Some(OrderStatus::Shipped),
            payment_status: Some(PaymentStatus::Paid),
            date_from: NaiveDate::from_ymd_opt(2025, 1, 1),
            date_to: NaiveDate::from_ymd_opt(2025, 6, 30),
        };
        let pairs = params.to_query();
        assert!(pairs.contains(&("sort".to_string(), "-createdAt".to_string())));
        assert!(pairs.contains(&("status".to_string(), "shipped".to_string())));
        assert!(pairs.contains(&("paymentStatus".to_string(), "paid".to_string())));
        assert!(pairs.contains(&("dateFrom".to_string(), "2025-01-01".to_string())));
    }

    #[test]
    fn test_to_query_drops_blank_search() {
        let params = OrderListParams {
            search: Some("   ".to_string()),
            ..OrderListParams::default()
        };
        assert!(params.to_query().is_empty());
    }

    #[test]
    fn test_order_decodes_from_wire_json() {
        let json = r#"{
            "id": "662b8e1f9c2a4d5e6f7a8b9c",
            "orderNumber": "MG-10023",
            "status": "processing",
            "paymentStatus": "paid",
            "items": [
                {"name": "Linen Overshirt", "quantity": 2, "size": "M", "price": 59.5, "image": null}
            ],
            "address": {"firstName": "Ada", "lastName": "Lovelace", "street": "1 Analytical Way",
                        "city": "London", "state": "", "zipcode": "N1", "country": "UK", "phone": ""},
            "shipping": {"trackingNumber": null, "carrier": null, "estimatedDelivery": null},
            "total": 119.0,
            "createdAt": "2025-06-01T10:30:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).expect("decode");
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.customer_name(), "Ada Lovelace");
        assert_eq!(order.items.len(), 1);
    }

    #[test]
    fn test_status_update_serializes_camel_case() {
        let input = StatusUpdateInput {
            order_id: "o1".to_string(),
            status: OrderStatus::Shipped,
            tracking_number: Some("1Z999".to_string()),
            carrier: Some("UPS".to_string()),
            estimated_delivery: None,
            note: None,
        };
        let json = serde_json::to_value(input).expect("encode");
        assert_eq!(json["orderId"], "o1");
        assert_eq!(json["status"], "shipped");
        assert_eq!(json["trackingNumber"], "1Z999");
        assert!(json.get("estimatedDelivery").is_none());
    }
}
