//! Integration tests for the list derivation pipelines.
//!
//! These cover the documented pipeline properties end to end: search,
//! bucket filters, sorting, pagination reset, and idempotence.

use chrono::{TimeZone, Utc};
use marigold_admin::listing::{
    CouponListQuery, OrderListQuery, ProductListQuery, derive_coupons, derive_orders,
    derive_products,
};
use marigold_core::{CouponStatus, OrderStatus, StockStatus};
use marigold_integration_tests::{order_fixture, product_fixture};

#[test]
fn test_search_red_returns_exactly_the_red_shirt() {
    let products = vec![
        product_fixture("Red Shirt", "Men", 10),
        product_fixture("Blue Hat", "Women", 10),
    ];
    let query = ProductListQuery {
        search: Some("red".to_string()),
        ..ProductListQuery::default()
    };
    let page = derive_products(&products, &query);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items.first().map(|p| p.name.as_str()), Some("Red Shirt"));
}

#[test]
fn test_stock_bucket_boundaries() {
    // Threshold is 5 in the fixture: 0 => out, 5 => low, 6 => in.
    assert_eq!(
        product_fixture("A", "Men", 0).stock_status(),
        StockStatus::OutOfStock
    );
    assert_eq!(
        product_fixture("B", "Men", 5).stock_status(),
        StockStatus::LowStock
    );
    assert_eq!(
        product_fixture("C", "Men", 6).stock_status(),
        StockStatus::InStock
    );
}

#[test]
fn test_twenty_three_items_make_three_pages_and_page_four_resets() {
    let products: Vec<_> = (0..23)
        .map(|i| product_fixture(&format!("Item {i:02}"), "Men", 10))
        .collect();

    let page3 = derive_products(
        &products,
        &ProductListQuery {
            page: Some(3),
            ..ProductListQuery::default()
        },
    );
    assert_eq!(page3.total_pages, 3);
    assert_eq!(page3.page, 3);
    assert_eq!(page3.items.len(), 3);

    let page4 = derive_products(
        &products,
        &ProductListQuery {
            page: Some(4),
            ..ProductListQuery::default()
        },
    );
    assert_eq!(page4.page, 1, "out-of-range page resets to the first page");
    assert_eq!(page4.items.len(), 10);
}

#[test]
fn test_pipeline_is_idempotent() {
    let products: Vec<_> = (0..23)
        .map(|i| product_fixture(&format!("Item {i:02}"), "Men", i % 7))
        .collect();
    let query = ProductListQuery {
        search: Some("item".to_string()),
        stock: Some("low-stock".to_string()),
        sort: Some("stock".to_string()),
        dir: Some("desc".to_string()),
        page: Some(1),
        ..ProductListQuery::default()
    };

    let first = derive_products(&products, &query);
    let second = derive_products(&products, &query);

    let ids = |items: &[marigold_client::Product]| {
        items.iter().map(|p| p.id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&first.items), ids(&second.items));
    assert_eq!(first.page, second.page);
    assert_eq!(first.total_pages, second.total_pages);
}

#[test]
fn test_coupon_status_derivation_matrix() {
    let coupon = |is_active: bool, from: &str, until: &str| -> marigold_client::Coupon {
        serde_json::from_value(serde_json::json!({
            "id": "c", "code": "CODE", "type": "percentage", "value": 10,
            "validFrom": from, "validUntil": until, "isActive": is_active,
        }))
        .expect("valid coupon fixture")
    };
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).single().expect("date");

    // Inside the window, active flag decides.
    assert_eq!(
        coupon(true, "2025-06-01T00:00:00Z", "2025-06-30T00:00:00Z").status(now),
        CouponStatus::Active
    );
    assert_eq!(
        coupon(false, "2025-06-01T00:00:00Z", "2025-06-30T00:00:00Z").status(now),
        CouponStatus::Inactive
    );
    // Past the window: expired regardless of the flag.
    assert_eq!(
        coupon(true, "2025-01-01T00:00:00Z", "2025-02-01T00:00:00Z").status(now),
        CouponStatus::Expired
    );
    assert_eq!(
        coupon(false, "2025-01-01T00:00:00Z", "2025-02-01T00:00:00Z").status(now),
        CouponStatus::Expired
    );
    // Before the window: scheduled.
    assert_eq!(
        coupon(true, "2025-09-01T00:00:00Z", "2025-10-01T00:00:00Z").status(now),
        CouponStatus::Scheduled
    );
}

#[test]
fn test_coupon_filter_and_search_compose() {
    let mk = |code: &str, active: bool| -> marigold_client::Coupon {
        serde_json::from_value(serde_json::json!({
            "id": code.to_lowercase(), "code": code, "description": "June drop",
            "type": "fixed", "value": 5,
            "validFrom": "2025-06-01T00:00:00Z", "validUntil": "2025-06-30T00:00:00Z",
            "isActive": active,
        }))
        .expect("valid coupon fixture")
    };
    let coupons = vec![mk("JUNE5", true), mk("JUNE10", false), mk("VIP", true)];
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).single().expect("date");

    let query = CouponListQuery {
        search: Some("june".to_string()),
        status: Some("active".to_string()),
        ..CouponListQuery::default()
    };
    let page = derive_coupons(&coupons, &query, now);
    let codes: Vec<&str> = page.items.iter().map(|c| c.code.as_str()).collect();
    // "june" matches JUNE5/JUNE10 by code and VIP by description; only the
    // active ones survive the bucket filter.
    assert_eq!(codes, ["JUNE5", "VIP"]);
}

#[test]
fn test_order_pipeline_filters_and_sorts() {
    let orders = vec![
        order_fixture("MG-3", "shipped", "Ada"),
        order_fixture("MG-1", "pending", "Grace"),
        order_fixture("MG-2", "shipped", "Joan"),
    ];
    let query = OrderListQuery {
        status: Some(OrderStatus::Shipped),
        sort: Some("orderNumber".to_string()),
        ..OrderListQuery::default()
    };
    let page = derive_orders(&orders, &query);
    let numbers: Vec<&str> = page.items.iter().map(|o| o.order_number.as_str()).collect();
    assert_eq!(numbers, ["MG-2", "MG-3"]);
}

#[test]
fn test_empty_collections_keep_one_page() {
    assert_eq!(derive_products(&[], &ProductListQuery::default()).total_pages, 1);
    assert_eq!(derive_orders(&[], &OrderListQuery::default()).total_pages, 1);
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).single().expect("date");
    assert_eq!(
        derive_coupons(&[], &CouponListQuery::default(), now).total_pages,
        1
    );
}
