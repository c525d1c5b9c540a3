//! Protocol constants.

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://endpoint.hey.cafe";

/// Query parameters injected from configuration.
pub mod query {
    /// Ask the server to encode errors as a boolean flag.
    pub const ERROR_BOOLEAN: &str = "error_boolean";
    /// Ask the server to keep HTTP 200 on logical errors.
    pub const ERROR_NO_HTTP: &str = "error_no_http";
    /// Parameter carrying the session token on session-eligible endpoints.
    pub const SESSION: &str = "query";
}

/// Request header names.
pub mod headers {
    pub use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};

    /// Media type sent in `Accept`.
    pub const JSON: &str = "application/json";
}

/// Response envelope field names.
pub mod envelope {
    /// Nested payload.
    pub const RESPONSE_DATA: &str = "response_data";
    /// In-band error flag.
    pub const ERROR_FLAG: &str = "system_api_error";
    /// Message accompanying the error flag.
    pub const ERROR_MESSAGE: &str = "system_api_error_message";
}
