//! Integration tests for form drafts and the API error taxonomy.

use marigold_admin::forms::{CouponForm, ReplyForm, StockForm};
use marigold_client::{AdminApi, ApiError};
use marigold_core::CouponKind;

// =============================================================================
// Error Taxonomy
// =============================================================================

#[test]
fn test_auth_errors_are_distinguishable_from_validation() {
    // Callers branch on the class: auth forces re-login, validation is
    // shown next to the form, server errors ask for a retry later.
    let auth = ApiError::Auth("expired".to_string());
    let validation = ApiError::Validation("duplicate code".to_string());
    let server = ApiError::Server {
        status: 503,
        message: "maintenance".to_string(),
    };

    assert!(auth.is_auth());
    assert!(!validation.is_auth());
    assert!(!server.is_auth());
}

#[test]
fn test_bad_base_url_fails_at_construction() {
    assert!(AdminApi::new("definitely not a url").is_err());
    assert!(AdminApi::new("https://api.marigoldapparel.com").is_ok());
}

// =============================================================================
// Coupon Draft Flow
// =============================================================================

fn coupon_form() -> CouponForm {
    CouponForm {
        code: "launch15".to_string(),
        description: "Launch discount".to_string(),
        kind: "percentage".to_string(),
        value: "15".to_string(),
        min_order_amount: "0".to_string(),
        max_discount: String::new(),
        usage_limit: "500".to_string(),
        valid_from: "2025-07-01T00:00".to_string(),
        valid_until: "2025-07-31T23:59".to_string(),
        is_active: Some("on".to_string()),
    }
}

#[test]
fn test_coupon_draft_submits_normalized_input() {
    let input = coupon_form().validate().expect("valid draft");
    assert_eq!(input.code, "LAUNCH15", "codes are uppercased on submit");
    assert_eq!(input.kind, CouponKind::Percentage);
    assert_eq!(input.usage_limit, Some(500));
    assert!(input.valid_from < input.valid_until);
}

#[test]
fn test_rejected_coupon_draft_keeps_submitted_values() {
    // The handler re-renders the same form on failure; nothing in
    // validation consumes or rewrites the draft fields.
    let form = CouponForm {
        value: "150".to_string(),
        ..coupon_form()
    };
    let err = form.validate().expect_err("percentage over 100");
    assert!(err.to_string().contains("cannot exceed 100"));
    assert_eq!(form.value, "150", "draft left intact for correction");
}

#[test]
fn test_coupon_date_window_must_be_ordered() {
    let form = CouponForm {
        valid_from: "2025-08-01T00:00".to_string(),
        valid_until: "2025-07-01T00:00".to_string(),
        ..coupon_form()
    };
    assert!(form.validate().is_err());
}

// =============================================================================
// Stock and Reply Drafts
// =============================================================================

#[test]
fn test_stock_draft_round_trips_through_validation() {
    let level = marigold_core::StockLevel {
        total: 40,
        available: 12,
        low_stock_threshold: 5,
    };
    let validated = StockForm::from_level(level).validate().expect("valid");
    assert_eq!(validated, level);
}

#[test]
fn test_stock_draft_rejects_available_above_total() {
    let form = StockForm {
        total: "5".to_string(),
        available: "9".to_string(),
        low_stock_threshold: "1".to_string(),
    };
    assert!(form.validate().is_err());
}

#[test]
fn test_reply_draft_trims_and_validates() {
    let form = ReplyForm {
        message: "  Thank you - restocking next week.  ".to_string(),
    };
    assert_eq!(
        form.validate().expect("valid"),
        "Thank you - restocking next week."
    );

    let empty = ReplyForm {
        message: "   ".to_string(),
    };
    assert!(empty.validate().is_err());
}
