//! Product wire types and mutation inputs.

use marigold_core::{StockLevel, StockStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product as returned by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Price in the store currency.
    pub price: Decimal,
    /// Top-level category (e.g. "Men", "Women", "Kids").
    pub category: String,
    /// Sub-category (e.g. "Topwear").
    #[serde(default)]
    pub sub_category: String,
    /// Whether the product is featured as a bestseller.
    #[serde(default)]
    pub bestseller: bool,
    /// Available sizes.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Image URLs, in display order (at most 4).
    #[serde(default)]
    pub images: Vec<String>,
    /// Inventory counts.
    #[serde(default)]
    pub inventory: StockLevel,
}

impl Product {
    /// Derived stock bucket for this product's inventory.
    #[must_use]
    pub const fn stock_status(&self) -> StockStatus {
        self.inventory.status()
    }
}

/// An image to upload with a new product.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original file name, forwarded to the API.
    pub file_name: String,
    /// MIME type (e.g. `image/jpeg`).
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// Input for creating a product (sent as multipart form data).
#[derive(Debug, Clone)]
pub struct ProductCreateInput {
    /// Display name.
    pub name: String,
    /// Long description.
    pub description: String,
    /// Price in the store currency.
    pub price: Decimal,
    /// Top-level category.
    pub category: String,
    /// Sub-category.
    pub sub_category: String,
    /// Whether to feature as a bestseller.
    pub bestseller: bool,
    /// Available sizes.
    pub sizes: Vec<String>,
    /// Images to upload (at most 4 are sent; extras are ignored).
    pub images: Vec<ImageUpload>,
}

/// Input for updating a product's editable fields.
///
/// All fields except `id` are optional - only provided fields change.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateInput {
    /// Product id.
    pub id: String,
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// New category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New sub-category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    /// New bestseller flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bestseller: Option<bool>,
    /// Replacement size list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
}

/// Input for updating a product's inventory counts.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdateInput<'a> {
    /// Product id.
    pub product_id: &'a str,
    /// Total units on hand.
    pub total: i64,
    /// Units available to sell.
    pub available: i64,
    /// Low-stock threshold.
    pub low_stock_threshold: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_from_wire_json() {
        let json = r#"{
            "id": "665f1c2ab8f4e2d3a4b5c6d7",
            "name": "Linen Overshirt",
            "description": "Relaxed fit",
            "price": 59.5,
            "category": "Men",
            "subCategory": "Topwear",
            "bestseller": true,
            "sizes": ["S", "M", "L"],
            "images": ["https://cdn.example.com/a.jpg"],
            "inventory": {"total": 40, "available": 3, "lowStockThreshold": 5}
        }"#;
        let product: Product = serde_json::from_str(json).expect("decode");
        assert_eq!(product.sub_category, "Topwear");
        assert_eq!(product.inventory.available, 3);
        assert_eq!(product.stock_status(), StockStatus::LowStock);
    }

    #[test]
    fn test_product_defaults_for_missing_fields() {
        let json = r#"{
            "id": "1", "name": "Cap", "price": 12, "category": "Men"
        }"#;
        let product: Product = serde_json::from_str(json).expect("decode");
        assert!(product.sizes.is_empty());
        assert!(!product.bestseller);
        assert_eq!(product.stock_status(), StockStatus::OutOfStock);
    }

    #[test]
    fn test_stock_update_serializes_camel_case() {
        let input = StockUpdateInput {
            product_id: "p1",
            total: 10,
            available: 4,
            low_stock_threshold: 2,
        };
        let json = serde_json::to_value(input).expect("encode");
        assert_eq!(json["productId"], "p1");
        assert_eq!(json["lowStockThreshold"], 2);
    }

    #[test]
    fn test_product_update_skips_unset_fields() {
        let input = ProductUpdateInput {
            id: "p1".to_string(),
            price: Some(Decimal::new(1999, 2)),
            ..ProductUpdateInput::default()
        };
        let json = serde_json::to_value(input).expect("encode");
        assert!(json.get("name").is_none());
        assert!(json.get("price").is_some());
    }
}
