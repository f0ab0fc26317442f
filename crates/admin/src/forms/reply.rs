//! Review reply form.

use serde::Deserialize;

use super::ValidationErrors;

/// Longest accepted reply, matching the storefront display limit.
const MAX_REPLY_LENGTH: usize = 2000;

/// Draft of an admin reply to a review.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplyForm {
    /// Reply text.
    #[serde(default)]
    pub message: String,
}

impl ReplyForm {
    /// Validate the draft into the reply message.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty or over-long message.
    pub fn validate(&self) -> Result<String, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let message = self.message.trim();

        if message.is_empty() {
            errors.push("Reply message is required");
        } else if message.chars().count() > MAX_REPLY_LENGTH {
            errors.push(format!("Reply must be at most {MAX_REPLY_LENGTH} characters"));
        }

        errors.into_result(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_trimmed() {
        let form = ReplyForm {
            message: "  Thanks for the feedback!  ".to_string(),
        };
        assert_eq!(form.validate().expect("valid"), "Thanks for the feedback!");
    }

    #[test]
    fn test_empty_message_is_rejected() {
        let form = ReplyForm {
            message: "   ".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_over_long_message_is_rejected() {
        let form = ReplyForm {
            message: "x".repeat(MAX_REPLY_LENGTH + 1),
        };
        let err = form.validate().expect_err("invalid");
        assert!(err.to_string().contains("at most"));
    }
}
