//! Order status update form (status selector plus tracking details).

use chrono::NaiveDate;
use marigold_client::StatusUpdateInput;
use marigold_core::OrderStatus;
use serde::Deserialize;

use super::ValidationErrors;

/// Draft of an order status change, as submitted from the orders page.
///
/// Carries the status the form was rendered against so the transition is
/// checked locally before any network call: the selector only offers
/// legal successors, and a crafted submission is rejected with an error
/// naming the transition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackingForm {
    /// The order's status when the form was rendered.
    #[serde(default)]
    pub current_status: String,
    /// The proposed status.
    #[serde(default)]
    pub status: String,
    /// Carrier tracking number; required when marking shipped.
    #[serde(default)]
    pub tracking_number: String,
    /// Carrier name; required when marking shipped.
    #[serde(default)]
    pub carrier: String,
    /// Estimated delivery date (`YYYY-MM-DD`).
    #[serde(default)]
    pub estimated_delivery: String,
    /// Free-form note attached to the change.
    #[serde(default)]
    pub note: String,
}

impl TrackingForm {
    /// Validate the draft into a status update for `order_id`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the rejected transition when the proposed
    /// status is not reachable from the current one, and field errors
    /// for missing tracking details on a shipment.
    pub fn validate(&self, order_id: &str) -> Result<StatusUpdateInput, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let current = parse_status(&self.current_status, "current status", &mut errors);
        let proposed = parse_status(&self.status, "status", &mut errors);

        if let (Some(current), Some(proposed)) = (current, proposed)
            && !current.can_transition_to(proposed)
        {
            errors.push(format!(
                "Order cannot move from {} to {}",
                current.label(),
                proposed.label()
            ));
        }

        let tracking_number = self.tracking_number.trim();
        let carrier = self.carrier.trim();
        if proposed == Some(OrderStatus::Shipped) {
            if tracking_number.is_empty() {
                errors.push("Tracking number is required when marking shipped");
            }
            if carrier.is_empty() {
                errors.push("Carrier is required when marking shipped");
            }
        }

        let estimated_delivery = match self.estimated_delivery.trim() {
            "" => None,
            raw => match raw.parse::<NaiveDate>() {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push("Estimated delivery is not a valid date");
                    None
                }
            },
        };

        let note = self.note.trim();
        let input = StatusUpdateInput {
            order_id: order_id.to_string(),
            status: proposed.unwrap_or_default(),
            tracking_number: (!tracking_number.is_empty()).then(|| tracking_number.to_string()),
            carrier: (!carrier.is_empty()).then(|| carrier.to_string()),
            estimated_delivery,
            note: (!note.is_empty()).then(|| note.to_string()),
        };
        errors.into_result(input)
    }
}

fn parse_status(
    raw: &str,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<OrderStatus> {
    match raw.trim().parse() {
        Ok(status) => Some(status),
        Err(_) => {
            errors.push(format!("Unknown {field}: {raw}"));
            None
        }
    }
}
