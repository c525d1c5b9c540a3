use super::{call, with_query};
use crate::client::HeyCafeClient;
use crate::endpoints;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

/// Search endpoints. Public.
#[derive(Debug, Clone, Copy)]
pub struct SearchResource<'a> {
    client: &'a HeyCafeClient,
}

impl<'a> SearchResource<'a> {
    pub(crate) fn new(client: &'a HeyCafeClient) -> Self {
        Self { client }
    }

    /// Search accounts.
    pub async fn accounts(&self, query: &str, params: Params) -> Result<Value> {
        call(self.client, &endpoints::SEARCH_ACCOUNTS, with_query(query, params)).await
    }

    /// Search cafes.
    pub async fn cafes(&self, query: &str, params: Params) -> Result<Value> {
        call(self.client, &endpoints::SEARCH_CAFES, with_query(query, params)).await
    }

    /// Search conversations.
    pub async fn conversations(&self, query: &str, params: Params) -> Result<Value> {
        call(self.client, &endpoints::SEARCH_CONVERSATIONS, with_query(query, params)).await
    }
}
