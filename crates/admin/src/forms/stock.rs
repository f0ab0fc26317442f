//! Product inventory edit form.

use marigold_core::StockLevel;
use serde::Deserialize;

use super::ValidationErrors;

/// Draft of a product's inventory counts, as submitted from the edit form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockForm {
    /// Total units on hand.
    #[serde(default)]
    pub total: String,
    /// Units available to sell.
    #[serde(default)]
    pub available: String,
    /// Low-stock threshold.
    #[serde(default)]
    pub low_stock_threshold: String,
}

impl StockForm {
    /// Seed the form from a product's current inventory.
    #[must_use]
    pub fn from_level(level: StockLevel) -> Self {
        Self {
            total: level.total.to_string(),
            available: level.available.to_string(),
            low_stock_threshold: level.low_stock_threshold.to_string(),
        }
    }

    /// Validate the draft into a stock level.
    ///
    /// # Errors
    ///
    /// Returns errors for non-numeric or negative counts, or when
    /// available exceeds total.
    pub fn validate(&self) -> Result<StockLevel, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let total = parse_count(&self.total, "Total", &mut errors);
        let available = parse_count(&self.available, "Available", &mut errors);
        let low_stock_threshold =
            parse_count(&self.low_stock_threshold, "Low-stock threshold", &mut errors);

        if errors.is_empty() && available > total {
            errors.push("Available cannot exceed total");
        }

        errors.into_result(StockLevel {
            total,
            available,
            low_stock_threshold,
        })
    }
}

fn parse_count(raw: &str, field: &str, errors: &mut ValidationErrors) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(count) if count >= 0 => count,
        Ok(_) => {
            errors.push(format!("{field} cannot be negative"));
            0
        }
        Err(_) => {
            errors.push(format!("{field} must be a whole number"));
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_counts() {
        let form = StockForm {
            total: "40".to_string(),
            available: "12".to_string(),
            low_stock_threshold: "5".to_string(),
        };
        let level = form.validate().expect("valid");
        assert_eq!(level.total, 40);
        assert_eq!(level.available, 12);
    }

    #[test]
    fn test_available_above_total_is_rejected() {
        let form = StockForm {
            total: "10".to_string(),
            available: "11".to_string(),
            low_stock_threshold: "2".to_string(),
        };
        let err = form.validate().expect_err("invalid");
        assert!(err.to_string().contains("Available cannot exceed total"));
    }

    #[test]
    fn test_negative_and_non_numeric_counts_are_rejected() {
        let form = StockForm {
            total: "-1".to_string(),
            available: "abc".to_string(),
            low_stock_threshold: String::new(),
        };
        let err = form.validate().expect_err("invalid");
        let message = err.to_string();
        assert!(message.contains("Total cannot be negative"));
        assert!(message.contains("Available must be a whole number"));
        assert!(message.contains("Low-stock threshold must be a whole number"));
    }

    #[test]
    fn test_round_trip_from_level() {
        let level = StockLevel {
            total: 7,
            available: 3,
            low_stock_threshold: 2,
        };
        let validated = StockForm::from_level(level).validate().expect("valid");
        assert_eq!(validated, level);
    }
}
