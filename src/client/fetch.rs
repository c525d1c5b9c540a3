//! The Hey.Cafe transport.
//!
//! `HeyCafeClient` turns a [`RequestDescriptor`] into exactly one HTTP round
//! trip and hands the result to [`normalize`](super::normalize).
//!
//! # Examples
//!
//! ## Public endpoint
//!
//! ```ignore
//! use heycafe::{HeyCafeClient, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HeyCafeClient::new();
//!     let hello = client.get("get_system_hello", Params::new(), false).await?;
//!     println!("{}", hello);
//!     Ok(())
//! }
//! ```
//!
//! ## Authenticated POST
//!
//! ```ignore
//! use heycafe::{ClientConfig, HeyCafeClient, Params, RequestDescriptor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HeyCafeClient::with_config(ClientConfig::default().with_api_key("key"));
//!     let request = RequestDescriptor::post("post_cafe_join")
//!         .with_body_param("query", "python")
//!         .requires_auth();
//!     client.execute(&request).await?;
//!     Ok(())
//! }
//! ```

use crate::client::response::normalize;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiErrorKind, HeyCafeError, Result};
use crate::params::Params;
use crate::protocol::{self, constants::headers, constants::query};
use crate::types::{Method, RawResponse, RequestDescriptor};
use futures::future::{select, Either};
use parking_lot::RwLock;
use serde_json::Value;
use std::future::Future;
use std::pin::pin;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("heycafe-rs/", env!("CARGO_PKG_VERSION"));

/// Credentials in effect for a call.
///
/// Replaced wholesale by the setters; each call works on the snapshot it took
/// before dispatch.
#[derive(Debug)]
struct Credentials {
    api_key: Option<String>,
    session_token: Option<String>,
}

impl Credentials {
    fn new(api_key: Option<String>, session_token: Option<String>) -> Self {
        Credentials {
            api_key: api_key.filter(|k| !k.is_empty()),
            session_token: session_token.filter(|t| !t.is_empty()),
        }
    }

    fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.session_token.is_none()
    }
}

/// How a single request authenticates.
#[derive(Debug, PartialEq, Eq)]
enum Auth<'a> {
    Bearer(&'a str),
    Session(&'a str),
    Anonymous,
}

impl Auth<'_> {
    fn label(&self) -> &'static str {
        match self {
            Auth::Bearer(_) => "bearer",
            Auth::Session(_) => "session",
            Auth::Anonymous => "none",
        }
    }
}

/// Async client for the Hey.Cafe REST API.
///
/// Cloning is cheap and clones share the connection pool and credentials.
/// The client is safe to use from many tasks at once: the request path only
/// reads shared state.
#[derive(Clone)]
pub struct HeyCafeClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    base_url: Arc<str>,
    credentials: Arc<RwLock<Arc<Credentials>>>,
}

impl HeyCafeClient {
    /// Client against the production API with no credentials.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Client against the production API with an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::default().with_api_key(api_key))
    }

    /// Client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout())
            .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_secs))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .user_agent(USER_AGENT);

        if !config.proxy_url.is_empty() {
            match reqwest::Proxy::all(&config.proxy_url) {
                Ok(proxy) => builder = builder.proxy(proxy),
                Err(e) => tracing::warn!("Ignoring invalid proxy URL: {}", e),
            }
        }

        let http = match builder.build() {
            Ok(http) => http,
            Err(e) => {
                tracing::warn!("Falling back to default HTTP client settings: {}", e);
                reqwest::Client::default()
            }
        };
        let credentials = Credentials::new(config.api_key.clone(), config.session_token.clone());

        HeyCafeClient {
            http,
            base_url: Arc::from(config.normalized_base_url()),
            credentials: Arc::new(RwLock::new(Arc::new(credentials))),
            config: Arc::new(config),
        }
    }

    /// Get the client configuration as constructed.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL with trailing slashes removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the API key. In-flight calls keep the key they started with.
    pub fn set_api_key(&self, api_key: Option<String>) {
        let mut guard = self.credentials.write();
        *guard = Arc::new(Credentials::new(api_key, guard.session_token.clone()));
    }

    /// Replace the session token. In-flight calls keep the token they started with.
    pub fn set_session_token(&self, token: Option<String>) {
        let mut guard = self.credentials.write();
        *guard = Arc::new(Credentials::new(guard.api_key.clone(), token));
    }

    /// Whether an API key is currently configured.
    pub fn has_api_key(&self) -> bool {
        self.credentials.read().api_key.is_some()
    }

    /// GET `endpoint` with `params` in the query string.
    pub async fn get(&self, endpoint: &str, params: Params, requires_auth: bool) -> Result<Value> {
        let mut request = RequestDescriptor::get(endpoint).with_query(params);
        request.requires_auth = requires_auth;
        self.execute(&request).await
    }

    /// POST `endpoint`; `params` go in the query string, `body` as a form.
    pub async fn post(
        &self,
        endpoint: &str,
        params: Params,
        body: Option<Params>,
        requires_auth: bool,
    ) -> Result<Value> {
        let mut request = RequestDescriptor::post(endpoint).with_query(params);
        request.body = body;
        request.requires_auth = requires_auth;
        self.execute(&request).await
    }

    /// Perform one API call and return the unwrapped payload.
    ///
    /// # Errors
    ///
    /// - [`HeyCafeError::AuthenticationRequired`] when the descriptor requires
    ///   auth and no credential is configured. Nothing is sent.
    /// - [`HeyCafeError::Api`] for transport failures, timeouts, unparseable
    ///   bodies, in-body error flags and (unless `error_no_http`) HTTP errors.
    pub async fn execute(&self, request: &RequestDescriptor) -> Result<Value> {
        let credentials = Arc::clone(&*self.credentials.read());

        if request.requires_auth && credentials.is_empty() {
            return Err(HeyCafeError::authentication_required(&request.endpoint));
        }

        let url = self.endpoint_url(&request.endpoint)?;
        let auth = select_auth(&credentials, request);
        let query = self.build_query(request, &auth);

        if self.config.enable_logging {
            tracing::debug!(
                method = request.method.as_str(),
                endpoint = %request.endpoint,
                auth = auth.label(),
                "Dispatching request"
            );
        }

        let mut req_builder = self
            .http
            .request(request.method.into(), url)
            .query(&query)
            .header(headers::ACCEPT, headers::JSON);

        if let Auth::Bearer(key) = auth {
            req_builder = req_builder.header(headers::AUTHORIZATION, protocol::bearer_value(key));
        }

        match (request.method, &request.body) {
            (Method::Post, Some(body)) => {
                let form = body.serialize();
                if !form.is_empty() {
                    req_builder = req_builder.form(&form);
                }
            }
            (Method::Get, Some(body)) if !body.is_empty() && self.config.enable_logging => {
                tracing::warn!(endpoint = %request.endpoint, "Body fields ignored on GET request");
            }
            _ => {}
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&request.endpoint, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_reqwest(&request.endpoint, e))?;

        if self.config.enable_logging {
            tracing::debug!(endpoint = %request.endpoint, status, bytes = body.len(), "Received response");
        }

        let result = normalize(
            &request.endpoint,
            &RawResponse { status, body },
            self.config.error_no_http,
        );

        if let Err(e) = &result {
            if self.config.enable_logging {
                tracing::warn!(endpoint = %request.endpoint, status, "API call failed: {}", e);
            }
        }

        result
    }

    /// Like [`execute`](Self::execute), abandoning the call when `cancel` completes first.
    ///
    /// A cancelled call fails with a `Cancelled` [`ApiError`]. Whether the
    /// server already acted on the request is unknown.
    pub async fn execute_with_cancel<F>(&self, request: &RequestDescriptor, cancel: F) -> Result<Value>
    where
        F: Future<Output = ()>,
    {
        let call = pin!(self.execute(request));
        let cancel = pin!(cancel);

        match select(call, cancel).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ApiError::new(
                ApiErrorKind::Cancelled,
                format!("Request to {} was cancelled", request.endpoint),
            )
            .into()),
        }
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        if endpoint.is_empty() {
            return Err(ApiError::new(ApiErrorKind::InvalidRequest, "Endpoint name is empty").into());
        }
        Url::parse(&format!("{}/{}", self.base_url, endpoint)).map_err(|e| {
            ApiError::new(
                ApiErrorKind::InvalidRequest,
                format!("Invalid URL for {endpoint}: {e}"),
            )
            .into()
        })
    }

    /// Configuration flags, then caller parameters, then the session token.
    fn build_query(&self, request: &RequestDescriptor, auth: &Auth<'_>) -> Vec<(String, String)> {
        let mut params = Params::new();
        if self.config.error_boolean {
            params.set(query::ERROR_BOOLEAN, true);
        }
        if self.config.error_no_http {
            params.set(query::ERROR_NO_HTTP, true);
        }
        params.extend(request.query.clone());

        if let Auth::Session(token) = auth {
            if params.contains_key(query::SESSION) && self.config.enable_logging {
                tracing::warn!(
                    endpoint = %request.endpoint,
                    "Session token replaces caller-supplied `{}` parameter",
                    query::SESSION
                );
            }
            params.set(query::SESSION, *token);
        }

        params.serialize()
    }
}

impl Default for HeyCafeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HeyCafeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeyCafeClient")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// API key wins whenever present; the session token only covers eligible endpoints.
fn select_auth<'a>(credentials: &'a Credentials, request: &RequestDescriptor) -> Auth<'a> {
    match (&credentials.api_key, &credentials.session_token) {
        (Some(key), _) => Auth::Bearer(key),
        (None, Some(token)) if request.session_eligible => Auth::Session(token),
        _ => Auth::Anonymous,
    }
}
