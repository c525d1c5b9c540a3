//! Header formatting and envelope field parsing.
//!
//! # Examples
//!
//! ```
//! use heycafe::protocol::{bearer_value, is_truthy_flag};
//! use serde_json::json;
//!
//! assert_eq!(bearer_value("k"), "Bearer k");
//! assert!(is_truthy_flag(&json!("YES")));
//! assert!(!is_truthy_flag(&json!(false)));
//! ```

use super::constants::envelope;
use serde_json::Value;

/// Format an `Authorization` header value for an API key.
#[inline]
pub fn bearer_value(api_key: &str) -> String {
    format!("Bearer {}", api_key)
}

/// Interpret the `system_api_error` flag.
///
/// | Value | Truthy |
/// |-------|--------|
/// | `true` | yes |
/// | `"true"`, `"1"`, `"yes"` (any case) | yes |
/// | anything else, including `1` as a number | no |
pub fn is_truthy_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => {
            let s = s.to_ascii_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes")
        }
        _ => false,
    }
}

/// Non-empty `system_api_error_message` of a body, if present.
///
/// Non-string messages are rendered as JSON text.
pub fn error_message(body: &Value) -> Option<String> {
    match body.get(envelope::ERROR_MESSAGE)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bearer_value() {
        assert_eq!(bearer_value("test-api-key"), "Bearer test-api-key");
    }

    #[test]
    fn test_truthy_flag_strings() {
        for v in ["true", "TRUE", "True", "1", "yes", "Yes"] {
            assert!(is_truthy_flag(&json!(v)), "{v} should be truthy");
        }
        for v in ["false", "0", "no", "", "y"] {
            assert!(!is_truthy_flag(&json!(v)), "{v} should be falsy");
        }
    }

    #[test]
    fn test_truthy_flag_non_strings() {
        assert!(is_truthy_flag(&json!(true)));
        assert!(!is_truthy_flag(&json!(false)));
        assert!(!is_truthy_flag(&json!(1)));
        assert!(!is_truthy_flag(&Value::Null));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(&json!({"system_api_error_message": "boom"})),
            Some("boom".to_string())
        );
        assert_eq!(error_message(&json!({"system_api_error_message": ""})), None);
        assert_eq!(error_message(&json!({})), None);
        assert_eq!(
            error_message(&json!({"system_api_error_message": 42})),
            Some("42".to_string())
        );
    }
}
