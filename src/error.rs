//! Error types for the Hey.Cafe client.
//!
//! The API reports failure in two ways at once: through the HTTP status code
//! and through an in-body `system_api_error` flag. Both collapse into a single
//! taxonomy with two kinds:
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`HeyCafeError::AuthenticationRequired`] | An endpoint needs a credential and none is configured. Raised before any I/O. |
//! | [`HeyCafeError::Api`] | Anything that went wrong on or after dispatch. |
//!
//! [`ApiError`] keeps the best available message together with the HTTP status
//! and the raw response body, plus an [`ApiErrorKind`] so callers can tell a
//! timeout from a server-reported failure without a third top-level variant.

use serde_json::Value;
use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HeyCafeError>;

/// Errors returned by [`HeyCafeClient`](crate::HeyCafeClient) and the resource façade.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HeyCafeError {
    /// The endpoint requires an API key or session token and neither is configured.
    #[error("{message}")]
    AuthenticationRequired {
        /// Human-readable explanation
        message: String,
    },

    /// The request was dispatched (or attempted) and failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl HeyCafeError {
    /// Build the client-side authentication failure for `endpoint`.
    pub fn authentication_required(endpoint: &str) -> Self {
        HeyCafeError::AuthenticationRequired {
            message: format!(
                "{endpoint} requires an API key or session token; \
                 set one on the client configuration"
            ),
        }
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            HeyCafeError::AuthenticationRequired { .. } => None,
            HeyCafeError::Api(e) => e.status,
        }
    }

    /// Raw response body captured for diagnostics, if any.
    pub fn body(&self) -> Option<&Value> {
        match self {
            HeyCafeError::AuthenticationRequired { .. } => None,
            HeyCafeError::Api(e) => e.body.as_ref(),
        }
    }

    /// Whether this is the client-side authentication precondition failure.
    pub fn is_authentication_required(&self) -> bool {
        matches!(self, HeyCafeError::AuthenticationRequired { .. })
    }

    /// Whether the round trip exceeded the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, HeyCafeError::Api(e) if e.is_timeout())
    }
}

/// Which signal produced an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The descriptor could not be turned into a request.
    InvalidRequest,
    /// The response body was not valid JSON.
    InvalidResponse,
    /// The body carried a truthy `system_api_error` flag.
    BodyFlag,
    /// HTTP status was 400 or above and HTTP error codes were trusted.
    HttpStatus,
    /// Connection, TLS or protocol failure before a response was read.
    Transport,
    /// The configured request timeout elapsed.
    Timeout,
    /// The caller's cancellation future completed first.
    Cancelled,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApiErrorKind::InvalidRequest => "invalid request",
            ApiErrorKind::InvalidResponse => "invalid response",
            ApiErrorKind::BodyFlag => "api error",
            ApiErrorKind::HttpStatus => "http status",
            ApiErrorKind::Transport => "transport",
            ApiErrorKind::Timeout => "timeout",
            ApiErrorKind::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// A failure reported by, or while talking to, the API.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Best available human-readable message
    pub message: String,
    /// HTTP status code, when a response was received
    pub status: Option<u16>,
    /// Full parsed response body, when it was valid JSON
    pub body: Option<Value>,
    /// Signal that produced this error
    pub kind: ApiErrorKind,
}

impl ApiError {
    /// Create an error with no status or body attached.
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
            status: None,
            body: None,
            kind,
        }
    }

    /// Attach the HTTP status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the raw response body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Whether the configured timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        self.kind == ApiErrorKind::Timeout
    }

    /// Map a `reqwest` failure onto the taxonomy.
    pub(crate) fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ApiErrorKind::Timeout
        } else {
            ApiErrorKind::Transport
        };
        let mut out = ApiError::new(kind, format!("Request to {endpoint} failed: {err}"));
        if let Some(status) = err.status() {
            out.status = Some(status.as_u16());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_attributes() {
        let err: HeyCafeError = ApiError::new(ApiErrorKind::HttpStatus, "failed")
            .with_status(400)
            .with_body(json!({"code": "bad"}))
            .into();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.body(), Some(&json!({"code": "bad"})));
        assert!(err.to_string().contains("failed"));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_authentication_required_message() {
        let err = HeyCafeError::authentication_required("get_account_cafes");
        assert!(err.is_authentication_required());
        assert!(err.to_string().contains("API key"));
        assert!(err.to_string().contains("get_account_cafes"));
        assert_eq!(err.status(), None);
        assert!(err.body().is_none());
    }

    #[test]
    fn test_timeout_kind() {
        let err: HeyCafeError = ApiError::new(ApiErrorKind::Timeout, "slow").into();
        assert!(err.is_timeout());
        assert_eq!(ApiErrorKind::Timeout.to_string(), "timeout");
    }
}
