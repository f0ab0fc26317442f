//! Integration tests for Marigold.
//!
//! The tests in `tests/` exercise the admin panel's logic across crate
//! boundaries - the order status workflow, the list derivation
//! pipelines, and the form validation flows - as pure logic, without a
//! live API.

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Build a product fixture from wire-shaped JSON.
///
/// # Panics
///
/// Panics if the JSON does not decode; fixtures are static, so this is a
/// test-authoring error.
#[must_use]
pub fn product_fixture(name: &str, category: &str, available: i64) -> marigold_client::Product {
    serde_json::from_value(serde_json::json!({
        "id": name.to_lowercase().replace(' ', "-"),
        "name": name,
        "price": 25,
        "category": category,
        "inventory": {"total": 50, "available": available, "lowStockThreshold": 5},
    }))
    .expect("valid product fixture")
}

/// Build an order fixture from wire-shaped JSON.
///
/// # Panics
///
/// Panics if the JSON does not decode.
#[must_use]
pub fn order_fixture(number: &str, status: &str, customer: &str) -> marigold_client::Order {
    serde_json::from_value(serde_json::json!({
        "id": number.to_lowercase(),
        "orderNumber": number,
        "status": status,
        "paymentStatus": "paid",
        "items": [{"name": "Linen Overshirt", "quantity": 1, "size": "M", "price": 59.5}],
        "address": {"firstName": customer, "lastName": "Example"},
        "total": 59.5,
        "createdAt": "2025-06-01T10:30:00Z",
    }))
    .expect("valid order fixture")
}
