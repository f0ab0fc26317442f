//! Draft state and local validation for the editable entities.
//!
//! Each form type mirrors the server fields of one entity as submitted
//! strings, and follows the same lifecycle:
//!
//! - opening an edit page seeds the form from the fetched entity;
//! - cancelling navigates back to the list, discarding the draft;
//! - saving validates locally, then calls the API; on success the
//!   handler redirects to the list (which re-fetches), on failure the
//!   form re-renders with the message and the submitted values intact.
//!
//! One entity of a given kind is editable at a time: edit state lives in
//! the page being rendered, and there is exactly one edit page per kind.

pub mod coupon;
pub mod product;
pub mod reply;
pub mod stock;
pub mod tracking;

pub use coupon::CouponForm;
pub use product::ProductForm;
pub use reply::ReplyForm;
pub use stock::StockForm;
pub use tracking::TrackingForm;

/// Field errors collected during local validation.
///
/// Rendered as a single user-visible message; the draft stays open so
/// the admin can correct the input and retry.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    /// Record a field error.
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    /// Whether validation passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Turn collected errors into a result.
    ///
    /// # Errors
    ///
    /// Returns `self` if any error was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_errors_pass_through_value() {
        let errors = ValidationErrors::default();
        assert_eq!(errors.into_result(7).expect("no errors"), 7);
    }

    #[test]
    fn test_errors_join_into_one_message() {
        let mut errors = ValidationErrors::default();
        errors.push("Code is required");
        errors.push("Value must be greater than zero");
        let err = errors.into_result(()).expect_err("errors recorded");
        assert_eq!(
            err.to_string(),
            "Code is required; Value must be greater than zero"
        );
    }
}
