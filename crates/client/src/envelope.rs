//! Response envelope normalization.
//!
//! Every Marigold API response shares the shape
//! `{success: bool, message?: string, ...data}`. This module turns an
//! HTTP status plus raw body into either the endpoint's typed data or a
//! classified [`ApiError`], in one place, so the per-resource methods
//! never inspect status codes themselves.

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::ApiError;

/// The envelope fields shared by every response.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Empty data payload for acknowledge-only endpoints (remove, delete).
#[derive(Debug, Deserialize)]
pub(crate) struct Ack {}

/// Decode a response body into the endpoint's data type.
///
/// Classification order:
/// 1. 401/403 are authentication failures regardless of body shape.
/// 2. A non-JSON body on a 5xx is a server error; otherwise it is a
///    decode failure (the API contract was violated).
/// 3. `success: false` maps by status: 404 to `NotFound`, 5xx to
///    `Server`, anything else to `Validation` with the server message.
/// 4. `success: true` deserializes the body into `T`.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<T, ApiError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::Auth(
            extract_message(body).unwrap_or_else(|| "invalid or expired session".to_string()),
        ));
    }

    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(err) => {
            if status.is_server_error() {
                return Err(ApiError::Server {
                    status: status.as_u16(),
                    message: snippet(body),
                });
            }
            return Err(ApiError::Decode(err));
        }
    };

    if !envelope.success {
        let message = envelope
            .message
            .unwrap_or_else(|| "request rejected".to_string());
        return Err(if status == StatusCode::NOT_FOUND {
            ApiError::NotFound(message)
        } else if status.is_server_error() {
            ApiError::Server {
                status: status.as_u16(),
                message,
            }
        } else {
            ApiError::Validation(message)
        });
    }

    serde_json::from_str(body).map_err(ApiError::Decode)
}

/// Pull the `message` field out of a body without requiring the envelope.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<Envelope>(body).ok()?.message
}

/// Bounded body excerpt for error messages.
fn snippet(body: &str) -> String {
    const MAX: usize = 200;
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty body".to_string();
    }
    trimmed.chars().take(MAX).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TokenData {
        token: String,
    }

    #[test]
    fn test_success_decodes_data() {
        let body = r#"{"success":true,"token":"abc123"}"#;
        let data: TokenData = decode_envelope(StatusCode::OK, body).expect("decode");
        assert_eq!(data.token, "abc123");
    }

    #[test]
    fn test_unauthorized_is_auth_error() {
        let body = r#"{"success":false,"message":"Not authorized, login again"}"#;
        let err = decode_envelope::<TokenData>(StatusCode::UNAUTHORIZED, body)
            .expect_err("auth failure");
        assert!(matches!(err, ApiError::Auth(message) if message.contains("login again")));
    }

    #[test]
    fn test_forbidden_is_auth_error_even_without_envelope() {
        let err = decode_envelope::<TokenData>(StatusCode::FORBIDDEN, "Forbidden")
            .expect_err("auth failure");
        assert!(matches!(err, ApiError::Auth(_)));
    }

    #[test]
    fn test_rejection_with_ok_status_is_validation() {
        // The API reports business rejections through the envelope, often
        // with a 200 status.
        let body = r#"{"success":false,"message":"Coupon code already exists"}"#;
        let err = decode_envelope::<Ack>(StatusCode::OK, body).expect_err("rejected");
        assert!(matches!(err, ApiError::Validation(message) if message.contains("already exists")));
    }

    #[test]
    fn test_rejection_with_400_is_validation() {
        let body = r#"{"success":false,"message":"Invalid status transition"}"#;
        let err = decode_envelope::<Ack>(StatusCode::BAD_REQUEST, body).expect_err("rejected");
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_404_is_not_found() {
        let body = r#"{"success":false,"message":"Order not found"}"#;
        let err = decode_envelope::<Ack>(StatusCode::NOT_FOUND, body).expect_err("missing");
        assert!(matches!(err, ApiError::NotFound(message) if message == "Order not found"));
    }

    #[test]
    fn test_5xx_with_envelope_is_server_error() {
        let body = r#"{"success":false,"message":"internal"}"#;
        let err =
            decode_envelope::<Ack>(StatusCode::INTERNAL_SERVER_ERROR, body).expect_err("server");
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
    }

    #[test]
    fn test_5xx_with_html_body_is_server_error() {
        let err = decode_envelope::<Ack>(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>")
            .expect_err("server");
        assert!(matches!(err, ApiError::Server { status: 502, .. }));
    }

    #[test]
    fn test_malformed_body_on_ok_is_decode_error() {
        let err = decode_envelope::<Ack>(StatusCode::OK, "not json").expect_err("decode");
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_missing_message_gets_default() {
        let body = r#"{"success":false}"#;
        let err = decode_envelope::<Ack>(StatusCode::OK, body).expect_err("rejected");
        assert!(matches!(err, ApiError::Validation(message) if message == "request rejected"));
    }
}
