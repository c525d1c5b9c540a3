//! Request and response value types.
//!
//! A [`RequestDescriptor`] describes one call: endpoint name, verb, query
//! parameters, optional form body and the authentication requirement.
//! [`RawResponse`] is what came back before normalization.

use crate::params::Params;
use bytes::Bytes;
use std::fmt;

/// HTTP verb. The API only uses GET and POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Parameters travel in the query string
    Get,
    /// Parameters travel in the query string, body fields as a form
    Post,
}

impl Method {
    /// Upper-case verb name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// Describes one API call.
///
/// # Examples
///
/// ```
/// use heycafe::{Method, RequestDescriptor};
///
/// let req = RequestDescriptor::post("post_cafe_join")
///     .with_body_param("query", "python")
///     .requires_auth();
///
/// assert_eq!(req.method, Method::Post);
/// assert!(req.requires_auth);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// Endpoint name appended to the base URL
    pub endpoint: String,
    /// HTTP verb
    pub method: Method,
    /// Query string parameters (both verbs)
    pub query: Params,
    /// Form body fields (POST only)
    pub body: Option<Params>,
    /// A credential must be configured for this call
    pub requires_auth: bool,
    /// The endpoint accepts a session token in place of an API key
    pub session_eligible: bool,
}

impl RequestDescriptor {
    /// Create a descriptor with no parameters.
    pub fn new(endpoint: impl Into<String>, method: Method) -> Self {
        RequestDescriptor {
            endpoint: endpoint.into(),
            method,
            query: Params::new(),
            body: None,
            requires_auth: false,
            session_eligible: false,
        }
    }

    /// GET descriptor.
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, Method::Get)
    }

    /// POST descriptor.
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, Method::Post)
    }

    /// Replace the query parameters.
    #[must_use]
    pub fn with_query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    /// Add one query parameter.
    #[must_use]
    pub fn with_query_param(
        mut self,
        key: impl Into<String>,
        value: impl Into<crate::ParamValue>,
    ) -> Self {
        self.query.set(key, value);
        self
    }

    /// Replace the body fields.
    #[must_use]
    pub fn with_body(mut self, body: Params) -> Self {
        self.body = Some(body);
        self
    }

    /// Add one body field.
    #[must_use]
    pub fn with_body_param(
        mut self,
        key: impl Into<String>,
        value: impl Into<crate::ParamValue>,
    ) -> Self {
        self.body.get_or_insert_with(Params::new).set(key, value);
        self
    }

    /// Mark the call as needing a credential.
    #[must_use]
    pub fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Allow a session token to authenticate this call.
    #[must_use]
    pub fn session_eligible(mut self) -> Self {
        self.session_eligible = true;
        self
    }
}

/// A response as received, before normalization.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Undecoded body
    pub body: Bytes,
}

impl RawResponse {
    /// Build a response from a status and any byte source.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        RawResponse {
            status,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builders() {
        let req = RequestDescriptor::get("get_feed_conversations")
            .with_query_param("count", 20u32)
            .requires_auth()
            .session_eligible();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.query.serialize(), vec![("count".to_string(), "20".to_string())]);
        assert!(req.body.is_none());
        assert!(req.requires_auth && req.session_eligible);
    }

    #[test]
    fn test_body_param_creates_body() {
        let req = RequestDescriptor::post("post_cafe_join").with_body_param("query", "python");
        assert_eq!(req.body.map(|b| b.len()), Some(1));
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(Method::Get), reqwest::Method::GET);
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
