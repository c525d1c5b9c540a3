use super::{call, with_query};
use crate::client::HeyCafeClient;
use crate::endpoints;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

/// Bot and utility endpoints. Public.
#[derive(Debug, Clone, Copy)]
pub struct BotResource<'a> {
    client: &'a HeyCafeClient,
}

impl<'a> BotResource<'a> {
    pub(crate) fn new(client: &'a HeyCafeClient) -> Self {
        Self { client }
    }

    /// Search Giphy.
    pub async fn giphy_search(&self, query: &str, params: Params) -> Result<Value> {
        call(self.client, &endpoints::BOT_GIPHY_SEARCH, with_query(query, params)).await
    }

    /// Detect the language of a text.
    pub async fn language_detect(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::BOT_LANGUAGE_DETECT, params).await
    }

    /// Translate a text.
    pub async fn language_translate(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::BOT_LANGUAGE_TRANSLATE, params).await
    }

    /// Open Graph and similar metadata of a web page.
    pub async fn website_meta(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::BOT_WEBSITE_META, params).await
    }

    /// Safespace text check.
    pub async fn safespace_text(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::BOT_SAFESPACE_TEXT, params).await
    }
}
