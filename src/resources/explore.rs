use super::call;
use crate::client::HeyCafeClient;
use crate::endpoints;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

/// Discovery endpoints. Public.
#[derive(Debug, Clone, Copy)]
pub struct ExploreResource<'a> {
    client: &'a HeyCafeClient,
}

impl<'a> ExploreResource<'a> {
    pub(crate) fn new(client: &'a HeyCafeClient) -> Self {
        Self { client }
    }

    /// Accounts worth exploring.
    pub async fn accounts(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::EXPLORE_ACCOUNTS, params).await
    }

    /// Cafes worth exploring.
    pub async fn cafes(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::EXPLORE_CAFES, params).await
    }

    /// Recent public conversations.
    pub async fn conversations(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::EXPLORE_CONVERSATIONS, params).await
    }

    /// Recent public comments.
    pub async fn comments(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::EXPLORE_COMMENTS, params).await
    }

    /// Trending conversations.
    pub async fn hot_conversations(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::EXPLORE_HOT_CONVERSATIONS, params).await
    }
}
