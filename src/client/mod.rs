//! Hey.Cafe HTTP client implementation.
//!
//! The transport and the logic that makes sense of the API's two error
//! conventions:
//!
//! - **Authenticate** with an API key (`Authorization: Bearer`) or, on
//!   session-eligible endpoints, a session token query parameter
//! - **Serialize** loosely typed parameter bags into query strings and forms
//! - **Normalize** HTTP status and in-body error flags into one error type
//! - **Unwrap** the `response_data` envelope
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch    - HeyCafeClient and request dispatch
//! ├── response - Status/body normalization and envelope unwrapping
//! └── utils    - Content encoding helpers
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`HeyCafeClient`] | Transport; one round trip per call |
//! | [`normalize`] | Pure response-to-result decision |
//!
//! # Examples
//!
//! ## Creating a Client
//!
//! ```
//! use heycafe::{ClientConfig, HeyCafeClient};
//!
//! // Production API, anonymous
//! let client = HeyCafeClient::new();
//!
//! // Custom configuration
//! let config = ClientConfig {
//!     api_key: Some("secret".to_string()),
//!     error_no_http: true,
//!     ..Default::default()
//! };
//! let client = HeyCafeClient::with_config(config);
//! assert!(client.has_api_key());
//! ```
//!
//! ## Encoding Content
//!
//! ```
//! use heycafe::client::{decode_content, encode_content};
//!
//! let encoded = encode_content("Hello, café");
//! assert_eq!(decode_content(&encoded).unwrap(), "Hello, café");
//! ```

mod fetch;
mod response;
mod utils;

pub use fetch::HeyCafeClient;
pub use response::{normalize, unwrap_envelope};
pub use utils::*;
