//! Utility functions for Hey.Cafe requests.
//!
//! Endpoints that accept rich text (`post_conversation_create` and friends)
//! expect the `content` field base64-encoded.

use crate::error::{ApiError, ApiErrorKind, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Base64-encode UTF-8 text for a `content` field.
///
/// # Examples
///
/// ```
/// use heycafe::client::encode_content;
///
/// assert_eq!(encode_content("hello"), "aGVsbG8=");
/// assert_eq!(encode_content(""), "");
/// ```
pub fn encode_content(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode a base64 `content` field back to text.
///
/// # Errors
///
/// Returns an `InvalidResponse` [`ApiError`] if the input is not valid base64
/// or does not decode to UTF-8.
pub fn decode_content(encoded: &str) -> Result<String> {
    let bytes = STANDARD.decode(encoded.trim()).map_err(|e| {
        ApiError::new(ApiErrorKind::InvalidResponse, format!("Invalid base64 content: {e}"))
    })?;
    String::from_utf8(bytes).map_err(|e| {
        ApiError::new(ApiErrorKind::InvalidResponse, format!("Content is not UTF-8: {e}")).into()
    })
}
