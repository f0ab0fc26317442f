//! Integration tests for the order status workflow.
//!
//! These tests verify the status state machine and the status update
//! form together: the selector only offers legal successors, and a
//! crafted submission is rejected locally, before any network call.

use marigold_admin::forms::TrackingForm;
use marigold_core::OrderStatus;

// =============================================================================
// State Machine Tests
// =============================================================================

/// Valid transitions for orders.
/// pending -> confirmed | cancelled
/// confirmed -> processing | cancelled
/// processing -> shipped | cancelled
/// shipped -> delivered | cancelled
/// delivered -> refunded
#[test]
fn test_valid_state_transitions() {
    let valid_transitions = [
        (OrderStatus::Pending, OrderStatus::Confirmed),
        (OrderStatus::Pending, OrderStatus::Cancelled),
        (OrderStatus::Confirmed, OrderStatus::Processing),
        (OrderStatus::Confirmed, OrderStatus::Cancelled),
        (OrderStatus::Processing, OrderStatus::Shipped),
        (OrderStatus::Processing, OrderStatus::Cancelled),
        (OrderStatus::Shipped, OrderStatus::Delivered),
        (OrderStatus::Shipped, OrderStatus::Cancelled),
        (OrderStatus::Delivered, OrderStatus::Refunded),
    ];

    for (from, to) in valid_transitions {
        assert!(from.can_transition_to(to), "expected {from} -> {to}");
    }
}

/// Invalid transitions - these must be rejected before any network call.
#[test]
fn test_invalid_state_transitions() {
    let invalid_transitions = [
        (OrderStatus::Pending, OrderStatus::Shipped),   // Can't skip ahead
        (OrderStatus::Pending, OrderStatus::Refunded),  // Can't skip ahead
        (OrderStatus::Shipped, OrderStatus::Processing), // Can't go back
        (OrderStatus::Delivered, OrderStatus::Cancelled), // Delivered only refunds
        (OrderStatus::Cancelled, OrderStatus::Confirmed), // Terminal
        (OrderStatus::Refunded, OrderStatus::Pending),  // Terminal
    ];

    for (from, to) in invalid_transitions {
        assert!(!from.can_transition_to(to), "expected {from} -x-> {to}");
    }
}

#[test]
fn test_every_pair_matches_successor_table() {
    for from in OrderStatus::ALL {
        for to in OrderStatus::ALL {
            let expected = from == to || from.successors().contains(&to);
            assert_eq!(from.can_transition_to(to), expected, "{from} -> {to}");
        }
    }
}

// =============================================================================
// Terminal State Tests
// =============================================================================

#[test]
fn test_terminal_states() {
    assert!(OrderStatus::Cancelled.is_terminal());
    assert!(OrderStatus::Refunded.is_terminal());
    assert!(OrderStatus::Cancelled.successors().is_empty());
    assert!(OrderStatus::Refunded.successors().is_empty());
}

#[test]
fn test_non_terminal_states_reach_a_terminal_state() {
    // Every live order can still be cancelled or refunded eventually.
    for status in [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ] {
        assert!(!status.is_terminal());
        assert!(!status.successors().is_empty());
    }
}

// =============================================================================
// Form-Level Tests (local rejection, no network)
// =============================================================================

#[test]
fn test_pending_to_shipped_is_rejected_locally_naming_the_transition() {
    // The form validates before the client is ever involved; an illegal
    // submission never produces a request.
    let form = TrackingForm {
        current_status: "pending".to_string(),
        status: "shipped".to_string(),
        tracking_number: "1Z999".to_string(),
        carrier: "UPS".to_string(),
        ..TrackingForm::default()
    };

    let err = form.validate("order-1").expect_err("must be rejected");
    assert_eq!(err.to_string(), "Order cannot move from Pending to Shipped");
}

#[test]
fn test_legal_shipment_builds_the_update_payload() {
    let form = TrackingForm {
        current_status: "processing".to_string(),
        status: "shipped".to_string(),
        tracking_number: "1Z999AA10123456784".to_string(),
        carrier: "UPS".to_string(),
        estimated_delivery: "2025-07-04".to_string(),
        note: String::new(),
    };

    let input = form.validate("order-1").expect("legal transition");
    assert_eq!(input.order_id, "order-1");
    assert_eq!(input.status, OrderStatus::Shipped);
    assert_eq!(input.tracking_number.as_deref(), Some("1Z999AA10123456784"));
}

#[test]
fn test_selector_options_mirror_the_state_machine() {
    // The per-row selector is built from the successor table, so what the
    // form offers and what it accepts can never diverge.
    for status in OrderStatus::ALL {
        for successor in status.successors() {
            let form = TrackingForm {
                current_status: status.as_str().to_string(),
                status: successor.as_str().to_string(),
                tracking_number: "TRACK".to_string(),
                carrier: "Carrier".to_string(),
                ..TrackingForm::default()
            };
            assert!(
                form.validate("order-1").is_ok(),
                "offered option {status} -> {successor} must validate"
            );
        }
    }
}
