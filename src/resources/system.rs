use super::call;
use crate::client::HeyCafeClient;
use crate::endpoints;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

/// System and utility endpoints. No credential needed.
#[derive(Debug, Clone, Copy)]
pub struct SystemResource<'a> {
    client: &'a HeyCafeClient,
}

impl<'a> SystemResource<'a> {
    pub(crate) fn new(client: &'a HeyCafeClient) -> Self {
        Self { client }
    }

    /// Ping the API. The payload is the string `"hello"`.
    pub async fn hello(&self) -> Result<Value> {
        call(self.client, &endpoints::SYSTEM_HELLO, Params::new()).await
    }

    /// Recommended endpoint host and the list of endpoints for this session.
    pub async fn endpoints(&self) -> Result<Value> {
        call(self.client, &endpoints::SYSTEM_ENDPOINTS, Params::new()).await
    }

    /// Emoji categories.
    pub async fn emoji_category(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::SYSTEM_EMOJI_CATEGORY, params).await
    }

    /// Search emoji by text.
    pub async fn emoji_search(&self, query: &str, params: Params) -> Result<Value> {
        call(self.client, &endpoints::SYSTEM_EMOJI_SEARCH, super::with_query(query, params)).await
    }

    /// Look up emoji by shortcode or other parameters.
    pub async fn emoji_lookup(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::SYSTEM_EMOJI_LOOKUP, params).await
    }

    /// Available reactions.
    pub async fn reactions(&self) -> Result<Value> {
        call(self.client, &endpoints::SYSTEM_REACTIONS, Params::new()).await
    }

    /// IP address details.
    pub async fn ip_details(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::SYSTEM_IP_DETAILS, params).await
    }

    /// Email address details.
    pub async fn email_details(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::SYSTEM_EMAIL_DETAILS, params).await
    }
}
