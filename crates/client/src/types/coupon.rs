//! Coupon wire types and mutation input.

use chrono::{DateTime, Utc};
use marigold_core::{CouponKind, CouponStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A discount coupon as returned by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Coupon id.
    pub id: String,
    /// Unique code, stored uppercased.
    pub code: String,
    /// Internal description shown in the admin list.
    #[serde(default)]
    pub description: String,
    /// Discount kind.
    #[serde(rename = "type")]
    pub kind: CouponKind,
    /// Percentage (0-100) or fixed amount, depending on `kind`.
    pub value: Decimal,
    /// Minimum order subtotal for the coupon to apply.
    #[serde(default)]
    pub min_order_amount: Decimal,
    /// Cap on the discount for percentage coupons.
    #[serde(default)]
    pub max_discount: Option<Decimal>,
    /// Total allowed redemptions; unlimited when absent.
    #[serde(default)]
    pub usage_limit: Option<u64>,
    /// Redemptions so far.
    #[serde(default)]
    pub used_count: u64,
    /// Start of the validity window.
    pub valid_from: DateTime<Utc>,
    /// End of the validity window.
    pub valid_until: DateTime<Utc>,
    /// Admin enable/disable flag.
    pub is_active: bool,
    /// Categories the coupon is restricted to; empty means all.
    #[serde(default)]
    pub applicable_categories: Vec<String>,
    /// Products the coupon is restricted to; empty means all.
    #[serde(default)]
    pub applicable_products: Vec<String>,
}

impl Coupon {
    /// Derived status at `now`; never stored.
    #[must_use]
    pub fn status(&self, now: DateTime<Utc>) -> CouponStatus {
        CouponStatus::derive(self.is_active, self.valid_from, self.valid_until, now)
    }
}

/// Input for creating or updating a coupon.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponInput {
    /// Unique code (uppercased before submission).
    pub code: String,
    /// Internal description.
    pub description: String,
    /// Discount kind.
    #[serde(rename = "type")]
    pub kind: CouponKind,
    /// Percentage (0-100) or fixed amount.
    pub value: Decimal,
    /// Minimum order subtotal.
    pub min_order_amount: Decimal,
    /// Discount cap for percentage coupons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<Decimal>,
    /// Total allowed redemptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u64>,
    /// Start of the validity window.
    pub valid_from: DateTime<Utc>,
    /// End of the validity window.
    pub valid_until: DateTime<Utc>,
    /// Enable/disable flag.
    pub is_active: bool,
    /// Category restriction; empty means all.
    pub applicable_categories: Vec<String>,
    /// Product restriction; empty means all.
    pub applicable_products: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Coupon {
        serde_json::from_str(
            r#"{
                "id": "66501234abcd",
                "code": "SUMMER20",
                "description": "Summer sale",
                "type": "percentage",
                "value": 20,
                "minOrderAmount": 50,
                "maxDiscount": 30,
                "usageLimit": 100,
                "usedCount": 12,
                "validFrom": "2025-06-01T00:00:00Z",
                "validUntil": "2025-08-31T23:59:59Z",
                "isActive": true,
                "applicableCategories": ["Men"],
                "applicableProducts": []
            }"#,
        )
        .expect("decode")
    }

    #[test]
    fn test_coupon_decodes_type_field_as_kind() {
        let coupon = sample();
        assert_eq!(coupon.kind, CouponKind::Percentage);
        assert_eq!(coupon.code, "SUMMER20");
    }

    #[test]
    fn test_status_uses_supplied_clock() {
        let coupon = sample();
        let during = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).single().expect("date");
        let after = Utc.with_ymd_and_hms(2025, 9, 15, 0, 0, 0).single().expect("date");
        let before = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).single().expect("date");
        assert_eq!(coupon.status(during), CouponStatus::Active);
        assert_eq!(coupon.status(after), CouponStatus::Expired);
        assert_eq!(coupon.status(before), CouponStatus::Scheduled);
    }

    #[test]
    fn test_input_serializes_kind_as_type() {
        let coupon = sample();
        let input = CouponInput {
            code: coupon.code,
            description: coupon.description,
            kind: coupon.kind,
            value: coupon.value,
            min_order_amount: coupon.min_order_amount,
            max_discount: coupon.max_discount,
            usage_limit: coupon.usage_limit,
            valid_from: coupon.valid_from,
            valid_until: coupon.valid_until,
            is_active: coupon.is_active,
            applicable_categories: coupon.applicable_categories,
            applicable_products: coupon.applicable_products,
        };
        let json = serde_json::to_value(input).expect("encode");
        assert_eq!(json["type"], "percentage");
        assert_eq!(json["minOrderAmount"], 50.0);
    }
}
