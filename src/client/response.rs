//! Response normalization.
//!
//! Decides, for one response, between the unwrapped payload and an
//! [`ApiError`]. Precedence:
//!
//! 1. Body is not JSON: `InvalidResponse`, status attached, no body.
//! 2. Truthy `system_api_error` flag: `BodyFlag`, regardless of status.
//! 3. Status 400 or above and `error_no_http` off: `HttpStatus`.
//! 4. Otherwise success; `response_data` is unwrapped when present.
//!
//! The body flag wins over the status because the server may send both, and
//! under `error_no_http` the status is meaningless.

use crate::error::{ApiError, ApiErrorKind, Result};
use crate::protocol::{self, constants::envelope};
use crate::types::RawResponse;
use serde_json::Value;

/// Fallback when the flag is set but carries no usable text.
const GENERIC_ERROR: &str = "API returned an error";

/// Normalize a raw response into the payload or an error.
///
/// # Examples
///
/// ```
/// use heycafe::client::normalize;
/// use heycafe::RawResponse;
///
/// let ok = RawResponse::new(200, r#"{"system_api_error": false, "response_data": "hello"}"#);
/// assert_eq!(normalize("get_system_hello", &ok, false).unwrap(), "hello");
///
/// let missing = RawResponse::new(404, "{}");
/// assert_eq!(normalize("get_cafe_info", &missing, false).unwrap_err().status(), Some(404));
/// assert!(normalize("get_cafe_info", &missing, true).is_ok());
/// ```
pub fn normalize(endpoint: &str, response: &RawResponse, error_no_http: bool) -> Result<Value> {
    let status = response.status;
    let body: Value = serde_json::from_slice(&response.body).map_err(|_| {
        ApiError::new(
            ApiErrorKind::InvalidResponse,
            format!("Invalid JSON response from {endpoint}"),
        )
        .with_status(status)
    })?;

    if let Some(flag) = body.get(envelope::ERROR_FLAG) {
        if protocol::is_truthy_flag(flag) {
            let message = protocol::error_message(&body)
                .or_else(|| flag_text(flag))
                .unwrap_or_else(|| GENERIC_ERROR.to_string());
            return Err(ApiError::new(ApiErrorKind::BodyFlag, message)
                .with_status(status)
                .with_body(body)
                .into());
        }
    }

    if status >= 400 && !error_no_http {
        let message =
            protocol::error_message(&body).unwrap_or_else(|| format!("HTTP {status}"));
        return Err(ApiError::new(ApiErrorKind::HttpStatus, message)
            .with_status(status)
            .with_body(body)
            .into());
    }

    Ok(unwrap_envelope(body))
}

/// Strip the envelope: `response_data` if present, else the whole body.
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key(envelope::RESPONSE_DATA) => {
            map.remove(envelope::RESPONSE_DATA).unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn flag_text(flag: &Value) -> Option<String> {
    let text = match flag {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}
