#![warn(missing_docs)]

//! # heycafe: Hey.Cafe API client
//!
//! Async client for the [Hey.Cafe](https://endpoint.hey.cafe) REST API.
//!
//! ## Overview
//!
//! The crate has two layers:
//!
//! 1. **Transport** - [`HeyCafeClient`] builds one authenticated HTTP request
//!    per [`RequestDescriptor`], serializes parameter bags, and returns the
//!    unwrapped payload
//! 2. **Resources** - [`HeyCafe`] groups the API's endpoints (account, cafe,
//!    chat, feed, stats, ...) on top of the transport, driven by a static
//!    [endpoint table](endpoints)
//!
//! ## Error Signaling
//!
//! The API signals errors through the HTTP status, through an in-body
//! `system_api_error` flag, or both. Two request flags change its behavior:
//!
//! - `error_boolean=true` - encode the in-body flag as a boolean
//! - `error_no_http=true` - always answer HTTP 200; only the body tells
//!
//! The client folds all of this into [`HeyCafeError`]: either
//! `AuthenticationRequired` (raised before any I/O) or `Api` carrying the
//! message, status and raw body. The body flag takes precedence over the
//! status.
//!
//! ## Authentication
//!
//! - **API key** - sent as `Authorization: Bearer {key}`
//! - **Session token** - sent as the `query` parameter on session-eligible
//!   endpoints (feed, notifications) when no API key is configured
//!
//! ## Client Usage
//!
//! ```ignore
//! use heycafe::{ClientConfig, HeyCafe, Params};
//! use heycafe::resources::FeedOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let hey = HeyCafe::new(ClientConfig::default().with_api_key("your-key"));
//!
//!     let hello = hey.system().hello().await?;
//!     assert_eq!(hello, "hello");
//!
//!     let feed = hey
//!         .feed()
//!         .conversations(FeedOptions { count: Some(10), ..Default::default() })
//!         .await?;
//!     println!("{}", feed);
//!
//!     // Raw access to any endpoint
//!     let cafe = hey
//!         .client()
//!         .get("get_cafe_info", Params::new().with("query", "python"), false)
//!         .await?;
//!     println!("{}", cafe);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[client]** - Transport, response normalization, content encoding
//! - **[config]** - Connection configuration
//! - **[error]** - Error types and result handling
//! - **[params]** - Parameter bags and wire serialization
//! - **[types]** - Request descriptors and raw responses
//! - **[endpoints]** - Static endpoint table
//! - **[resources]** - Resource groups
//! - **[protocol]** - Wire constants and envelope helpers

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod params;
pub mod protocol;
pub mod resources;
pub mod types;

mod hey_cafe;

pub use client::{decode_content, encode_content, HeyCafeClient};
pub use config::ClientConfig;
pub use error::{ApiError, ApiErrorKind, HeyCafeError, Result};
pub use hey_cafe::HeyCafe;
pub use params::{ParamValue, Params};
pub use types::{Method, RawResponse, RequestDescriptor};
