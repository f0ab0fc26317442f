//! Coupon kind and the derived coupon status.
//!
//! The status is computed from the `is_active` flag plus the validity
//! window against a caller-supplied `now`; it is never stored. Expiry
//! wins over everything else, so a disabled coupon whose window has
//! passed still reads as Expired.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a coupon discounts an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponKind {
    /// Percentage off the order subtotal.
    Percentage,
    /// Fixed amount off the order subtotal.
    Fixed,
}

impl CouponKind {
    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
        }
    }
}

impl std::fmt::Display for CouponKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived coupon status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponStatus {
    /// Enabled and inside its validity window.
    Active,
    /// Disabled by the admin.
    Inactive,
    /// The validity window has passed, regardless of `is_active`.
    Expired,
    /// The validity window has not started yet.
    Scheduled,
}

impl CouponStatus {
    /// Derive the status of a coupon at `now`.
    #[must_use]
    pub fn derive(
        is_active: bool,
        valid_from: DateTime<Utc>,
        valid_until: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        if now > valid_until {
            Self::Expired
        } else if !is_active {
            Self::Inactive
        } else if now < valid_from {
            Self::Scheduled
        } else {
            Self::Active
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Expired => "Expired",
            Self::Scheduled => "Scheduled",
        }
    }

    /// Lowercase wire/filter name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Expired => "expired",
            Self::Scheduled => "scheduled",
        }
    }
}

impl std::fmt::Display for CouponStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).single().expect("valid date")
    }

    #[test]
    fn test_active_inside_window() {
        let status = CouponStatus::derive(true, at(2025, 1, 1), at(2025, 12, 31), at(2025, 6, 15));
        assert_eq!(status, CouponStatus::Active);
    }

    #[test]
    fn test_inactive_inside_window() {
        let status = CouponStatus::derive(false, at(2025, 1, 1), at(2025, 12, 31), at(2025, 6, 15));
        assert_eq!(status, CouponStatus::Inactive);
    }

    #[test]
    fn test_expired_overrides_active_flag() {
        for is_active in [true, false] {
            let status =
                CouponStatus::derive(is_active, at(2025, 1, 1), at(2025, 3, 1), at(2025, 6, 15));
            assert_eq!(status, CouponStatus::Expired);
        }
    }

    #[test]
    fn test_scheduled_before_window() {
        let status = CouponStatus::derive(true, at(2025, 9, 1), at(2025, 12, 31), at(2025, 6, 15));
        assert_eq!(status, CouponStatus::Scheduled);
    }

    #[test]
    fn test_inactive_wins_over_scheduled() {
        // A disabled coupon with a future window reads Inactive, not Scheduled.
        let status = CouponStatus::derive(false, at(2025, 9, 1), at(2025, 12, 31), at(2025, 6, 15));
        assert_eq!(status, CouponStatus::Inactive);
    }

    #[test]
    fn test_window_boundaries_are_inclusive() {
        let from = at(2025, 1, 1);
        let until = at(2025, 12, 31);
        assert_eq!(CouponStatus::derive(true, from, until, from), CouponStatus::Active);
        assert_eq!(CouponStatus::derive(true, from, until, until), CouponStatus::Active);
    }
}
