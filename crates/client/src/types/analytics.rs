//! Read-only analytics wire types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reporting period accepted by the analytics endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsPeriod {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl AnalyticsPeriod {
    /// Query-parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

impl std::fmt::Display for AnalyticsPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headline numbers for the dashboard overview.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Gross sales over the period.
    #[serde(default)]
    pub total_sales: Decimal,
    /// Orders placed over the period.
    #[serde(default)]
    pub total_orders: u64,
    /// Products in the catalog.
    #[serde(default)]
    pub total_products: u64,
    /// Registered customers.
    #[serde(default)]
    pub total_customers: u64,
    /// Orders awaiting confirmation.
    #[serde(default)]
    pub pending_orders: u64,
    /// Products at or below their low-stock threshold.
    #[serde(default)]
    pub low_stock_count: u64,
}

/// One point in the sales-over-time series.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoint {
    /// Bucket date.
    pub date: NaiveDate,
    /// Sales in the bucket.
    #[serde(default)]
    pub sales: Decimal,
    /// Orders in the bucket.
    #[serde(default)]
    pub orders: u64,
}

/// Sales analytics for a period.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAnalytics {
    /// Period the series covers.
    #[serde(default)]
    pub period: String,
    /// Time series, oldest first.
    #[serde(default)]
    pub series: Vec<SalesPoint>,
    /// Sum over the series.
    #[serde(default)]
    pub total_sales: Decimal,
}

/// A top-selling product row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    /// Product id.
    pub product_id: String,
    /// Product name.
    pub name: String,
    /// Units sold over the period.
    #[serde(default)]
    pub units_sold: u64,
    /// Revenue over the period.
    #[serde(default)]
    pub revenue: Decimal,
}

/// Product analytics for a period.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAnalytics {
    /// Best sellers, highest revenue first.
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
}

/// Customer analytics for a period.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAnalytics {
    /// First-time customers over the period.
    #[serde(default)]
    pub new_customers: u64,
    /// Customers with a prior order.
    #[serde(default)]
    pub returning_customers: u64,
    /// All registered customers.
    #[serde(default)]
    pub total_customers: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_stats_tolerates_missing_fields() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"totalSales": 1250.5, "totalOrders": 31}"#).expect("decode");
        assert_eq!(stats.total_orders, 31);
        assert_eq!(stats.low_stock_count, 0);
    }

    #[test]
    fn test_sales_series_decodes() {
        let json = r#"{
            "period": "month",
            "series": [{"date": "2025-06-01", "sales": 100.0, "orders": 4}],
            "totalSales": 100.0
        }"#;
        let sales: SalesAnalytics = serde_json::from_str(json).expect("decode");
        assert_eq!(sales.series.len(), 1);
        assert_eq!(sales.series.first().map(|p| p.orders), Some(4));
    }

    #[test]
    fn test_period_as_str() {
        assert_eq!(AnalyticsPeriod::Week.as_str(), "week");
        assert_eq!(AnalyticsPeriod::default().as_str(), "month");
    }
}
