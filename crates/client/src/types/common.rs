//! Common wire types shared across resources.

use serde::{Deserialize, Serialize};

/// Shipping/billing address attached to an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Street line.
    #[serde(default)]
    pub street: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// State or province.
    #[serde(default)]
    pub state: String,
    /// Postal/ZIP code.
    #[serde(default)]
    pub zipcode: String,
    /// Country.
    #[serde(default)]
    pub country: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
}

impl Address {
    /// Customer display name, falling back to "Guest" when both name
    /// fields are empty.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string();
        if name.is_empty() {
            "Guest".to_string()
        } else {
            name
        }
    }
}

/// Server-side pagination metadata for orders and reviews.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Current page (1-based).
    pub page: u32,
    /// Page size used by the server.
    #[serde(default)]
    pub limit: u32,
    /// Total matching items.
    pub total: u64,
    /// Total page count.
    pub total_pages: u32,
}
