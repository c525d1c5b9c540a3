//! Client configuration.
//!
//! # Examples
//!
//! ```
//! use heycafe::ClientConfig;
//!
//! let config = ClientConfig::default()
//!     .with_api_key("secret")
//!     .with_error_no_http(true)
//!     .with_timeout_ms(5_000);
//!
//! assert!(config.error_boolean);
//! assert_eq!(config.request_timeout_ms, 5_000);
//! ```

use crate::protocol::constants::DEFAULT_BASE_URL;
use std::fmt;
use std::time::Duration;

/// Connection configuration for [`HeyCafeClient`](crate::HeyCafeClient).
///
/// Fixed once the client is built, except for the credentials, which can be
/// swapped through the client's setters.
#[derive(Clone)]
pub struct ClientConfig {
    /// API root; trailing slashes are stripped by the client
    pub base_url: String,
    /// Bearer credential sent in `Authorization`
    pub api_key: Option<String>,
    /// Login-session credential sent as a query parameter on eligible endpoints
    pub session_token: Option<String>,
    /// Send `error_boolean=true` on every request
    pub error_boolean: bool,
    /// Send `error_no_http=true` and ignore HTTP error statuses
    pub error_no_http: bool,
    /// Bound on the whole round trip
    pub request_timeout_ms: u64,
    /// How long idle pooled connections are kept
    pub pool_idle_timeout_secs: u64,
    /// Idle connections kept per host
    pub max_idle_per_host: usize,
    /// Optional proxy for all traffic; empty disables it
    pub proxy_url: String,
    /// Emit `tracing` events for requests and normalized errors
    pub enable_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            session_token: None,
            error_boolean: true,
            error_no_http: false,
            request_timeout_ms: 30_000,
            pool_idle_timeout_secs: 90,
            max_idle_per_host: 10,
            proxy_url: String::new(),
            enable_logging: true,
        }
    }
}

impl ClientConfig {
    /// Default configuration against another host.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Set the API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the session token.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Toggle `error_boolean`.
    #[must_use]
    pub fn with_error_boolean(mut self, enabled: bool) -> Self {
        self.error_boolean = enabled;
        self
    }

    /// Toggle `error_no_http`.
    #[must_use]
    pub fn with_error_no_http(mut self, enabled: bool) -> Self {
        self.error_no_http = enabled;
        self
    }

    /// Set the request timeout in milliseconds.
    #[must_use]
    pub fn with_timeout_ms(mut self, ms: u64) -> Self {
        self.request_timeout_ms = ms;
        self
    }

    /// Route traffic through a proxy.
    #[must_use]
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = proxy_url.into();
        self
    }

    /// Toggle tracing output.
    #[must_use]
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.enable_logging = enabled;
        self
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Base URL without trailing slashes.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn redact(secret: &Option<String>) -> Option<&'static str> {
    secret.as_ref().map(|_| "<redacted>")
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &redact(&self.api_key))
            .field("session_token", &redact(&self.session_token))
            .field("error_boolean", &self.error_boolean)
            .field("error_no_http", &self.error_no_http)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("pool_idle_timeout_secs", &self.pool_idle_timeout_secs)
            .field("max_idle_per_host", &self.max_idle_per_host)
            .field("proxy_url", &self.proxy_url)
            .field("enable_logging", &self.enable_logging)
            .finish()
    }
}
