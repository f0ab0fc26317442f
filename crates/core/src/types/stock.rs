//! Inventory stock levels and the derived stock bucket.

use serde::{Deserialize, Serialize};

/// Inventory counts for a product.
///
/// The server maintains the `available <= total` invariant; it is not
/// re-enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    /// Total units on hand.
    pub total: i64,
    /// Units available to sell.
    pub available: i64,
    /// At or below this count (and above zero) the product is low stock.
    pub low_stock_threshold: i64,
}

impl StockLevel {
    /// Derive the stock bucket for this level.
    #[must_use]
    pub const fn status(self) -> StockStatus {
        if self.available == 0 {
            StockStatus::OutOfStock
        } else if self.available <= self.low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

/// Derived stock bucket, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Kebab-case wire/filter name (`out-of-stock`, `low-stock`, `in-stock`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutOfStock => "out-of-stock",
            Self::LowStock => "low-stock",
            Self::InStock => "in-stock",
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OutOfStock => "Out of stock",
            Self::LowStock => "Low stock",
            Self::InStock => "In stock",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
