//! Coupon create/edit form.

use chrono::{DateTime, NaiveDateTime, Utc};
use marigold_client::{Coupon, CouponInput};
use marigold_core::CouponKind;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::ValidationErrors;

/// Format used by `datetime-local` inputs.
const DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M";

/// Draft of a coupon, as submitted from the create/edit form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CouponForm {
    /// Coupon code; uppercased on submit.
    #[serde(default)]
    pub code: String,
    /// Internal description.
    #[serde(default)]
    pub description: String,
    /// Discount kind (`percentage` / `fixed`).
    #[serde(default)]
    pub kind: String,
    /// Discount value.
    #[serde(default)]
    pub value: String,
    /// Minimum order subtotal.
    #[serde(default)]
    pub min_order_amount: String,
    /// Optional discount cap.
    #[serde(default)]
    pub max_discount: String,
    /// Optional redemption limit.
    #[serde(default)]
    pub usage_limit: String,
    /// Window start (`datetime-local`).
    #[serde(default)]
    pub valid_from: String,
    /// Window end (`datetime-local`).
    #[serde(default)]
    pub valid_until: String,
    /// Checkbox; present when checked.
    #[serde(default)]
    pub is_active: Option<String>,
}

impl CouponForm {
    /// Seed the form from an existing coupon (opening the edit page).
    #[must_use]
    pub fn from_coupon(coupon: &Coupon) -> Self {
        Self {
            code: coupon.code.clone(),
            description: coupon.description.clone(),
            kind: coupon.kind.as_str().to_string(),
            value: coupon.value.to_string(),
            min_order_amount: coupon.min_order_amount.to_string(),
            max_discount: coupon
                .max_discount
                .map(|d| d.to_string())
                .unwrap_or_default(),
            usage_limit: coupon
                .usage_limit
                .map(|l| l.to_string())
                .unwrap_or_default(),
            valid_from: coupon.valid_from.format(DATETIME_LOCAL).to_string(),
            valid_until: coupon.valid_until.format(DATETIME_LOCAL).to_string(),
            is_active: coupon.is_active.then(|| "on".to_string()),
        }
    }

    /// A blank form with sensible defaults for the create page.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            kind: CouponKind::Percentage.as_str().to_string(),
            is_active: Some("on".to_string()),
            ..Self::default()
        }
    }

    /// Validate the draft and build the API input.
    ///
    /// # Errors
    ///
    /// Returns every violated rule: required code, known kind, positive
    /// value (at most 100 for percentages), non-negative minimum,
    /// positive optional cap and limit, parseable dates in order.
    pub fn validate(&self) -> Result<CouponInput, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let code = self.code.trim().to_uppercase();
        if code.is_empty() {
            errors.push("Code is required");
        }

        let kind = match self.kind.as_str() {
            "percentage" => CouponKind::Percentage,
            "fixed" => CouponKind::Fixed,
            other => {
                errors.push(format!("Unknown discount type: {other}"));
                CouponKind::Percentage
            }
        };

        let value = parse_decimal(&self.value, "Value", &mut errors);
        if value <= Decimal::ZERO {
            errors.push("Value must be greater than zero");
        } else if kind == CouponKind::Percentage && value > Decimal::from(100) {
            errors.push("Percentage value cannot exceed 100");
        }

        let min_order_amount = parse_decimal(&self.min_order_amount, "Minimum order", &mut errors);
        if min_order_amount < Decimal::ZERO {
            errors.push("Minimum order amount cannot be negative");
        }

        let max_discount = parse_optional_decimal(&self.max_discount, "Max discount", &mut errors);
        if let Some(cap) = max_discount
            && cap <= Decimal::ZERO
        {
            errors.push("Max discount must be greater than zero");
        }

        let usage_limit = match self.usage_limit.trim() {
            "" => None,
            raw => match raw.parse::<u64>() {
                Ok(0) => {
                    errors.push("Usage limit must be a positive whole number");
                    None
                }
                Ok(limit) => Some(limit),
                Err(_) => {
                    errors.push("Usage limit must be a positive whole number");
                    None
                }
            },
        };

        let valid_from = parse_datetime(&self.valid_from, "Valid from", &mut errors);
        let valid_until = parse_datetime(&self.valid_until, "Valid until", &mut errors);
        if let (Some(from), Some(until)) = (valid_from, valid_until)
            && from >= until
        {
            errors.push("Valid-from must be before valid-until");
        }

        let input = CouponInput {
            code,
            description: self.description.trim().to_string(),
            kind,
            value,
            min_order_amount,
            max_discount,
            usage_limit,
            valid_from: valid_from.unwrap_or_default(),
            valid_until: valid_until.unwrap_or_default(),
            is_active: self.is_active.is_some(),
            applicable_categories: vec![],
            applicable_products: vec![],
        };
        errors.into_result(input)
    }
}

fn parse_decimal(raw: &str, field: &str, errors: &mut ValidationErrors) -> Decimal {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(format!("{field} is required"));
        return Decimal::ZERO;
    }
    raw.parse().unwrap_or_else(|_| {
        errors.push(format!("{field} must be a number"));
        Decimal::ZERO
    })
}

fn parse_optional_decimal(
    raw: &str,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(format!("{field} must be a number"));
            None
        }
    }
}

fn parse_datetime(
    raw: &str,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(format!("{field} is required"));
        return None;
    }
    match NaiveDateTime::parse_from_str(raw, DATETIME_LOCAL) {
        Ok(naive) => Some(naive.and_utc()),
        Err(_) => {
            errors.push(format!("{field} is not a valid date"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CouponForm {
        CouponForm {
            code: "summer20".to_string(),
            description: "Summer sale".to_string(),
            kind: "percentage".to_string(),
            value: "20".to_string(),
            min_order_amount: "50".to_string(),
            max_discount: "30".to_string(),
            usage_limit: "100".to_string(),
            valid_from: "2025-06-01T00:00".to_string(),
            valid_until: "2025-08-31T23:59".to_string(),
            is_active: Some("on".to_string()),
        }
    }

    #[test]
    fn test_valid_form_uppercases_code() {
        let input = valid_form().validate().expect("valid");
        assert_eq!(input.code, "SUMMER20");
        assert_eq!(input.kind, CouponKind::Percentage);
        assert!(input.is_active);
    }

    #[test]
    fn test_empty_code_is_rejected() {
        let form = CouponForm {
            code: "   ".to_string(),
            ..valid_form()
        };
        let err = form.validate().expect_err("invalid");
        assert!(err.to_string().contains("Code is required"));
    }

    #[test]
    fn test_percentage_over_100_is_rejected() {
        let form = CouponForm {
            value: "120".to_string(),
            ..valid_form()
        };
        let err = form.validate().expect_err("invalid");
        assert!(err.to_string().contains("cannot exceed 100"));
    }

    #[test]
    fn test_fixed_coupon_may_exceed_100() {
        let form = CouponForm {
            kind: "fixed".to_string(),
            value: "150".to_string(),
            ..valid_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_date_ordering_is_enforced() {
        let form = CouponForm {
            valid_from: "2025-09-01T00:00".to_string(),
            valid_until: "2025-08-31T23:59".to_string(),
            ..valid_form()
        };
        let err = form.validate().expect_err("invalid");
        assert!(err.to_string().contains("before valid-until"));
    }

    #[test]
    fn test_optional_fields_may_be_blank() {
        let form = CouponForm {
            max_discount: String::new(),
            usage_limit: String::new(),
            ..valid_form()
        };
        let input = form.validate().expect("valid");
        assert!(input.max_discount.is_none());
        assert!(input.usage_limit.is_none());
    }

    #[test]
    fn test_unchecked_checkbox_means_inactive() {
        let form = CouponForm {
            is_active: None,
            ..valid_form()
        };
        let input = form.validate().expect("valid");
        assert!(!input.is_active);
    }

    #[test]
    fn test_round_trip_through_from_coupon() {
        let coupon: Coupon = serde_json::from_value(serde_json::json!({
            "id": "c1", "code": "WELCOME10", "type": "fixed", "value": 10,
            "validFrom": "2025-01-01T00:00:00Z", "validUntil": "2025-12-31T00:00:00Z",
            "isActive": true,
        }))
        .expect("decode");
        let form = CouponForm::from_coupon(&coupon);
        assert_eq!(form.code, "WELCOME10");
        assert_eq!(form.valid_from, "2025-01-01T00:00");
        let input = form.validate().expect("valid");
        assert_eq!(input.kind, CouponKind::Fixed);
    }
}
