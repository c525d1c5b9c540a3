use super::{call, with_query};
use crate::client::HeyCafeClient;
use crate::endpoints;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

/// Cafe (community) endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CafeResource<'a> {
    client: &'a HeyCafeClient,
}

impl<'a> CafeResource<'a> {
    pub(crate) fn new(client: &'a HeyCafeClient) -> Self {
        Self { client }
    }

    /// Cafe info by alias or id.
    pub async fn info(&self, query: &str) -> Result<Value> {
        call(self.client, &endpoints::CAFE_INFO, with_query(query, Params::new())).await
    }

    /// Conversations in a cafe.
    pub async fn conversations(&self, query: &str, params: Params) -> Result<Value> {
        call(self.client, &endpoints::CAFE_CONVERSATIONS, with_query(query, params)).await
    }

    /// Members of a cafe.
    pub async fn members(&self, query: &str, params: Params) -> Result<Value> {
        call(self.client, &endpoints::CAFE_MEMBERS, with_query(query, params)).await
    }

    /// Create a cafe.
    pub async fn create(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::CAFE_CREATE, data).await
    }

    /// Delete a cafe.
    pub async fn delete(&self, query: &str) -> Result<Value> {
        call(self.client, &endpoints::CAFE_DELETE, with_query(query, Params::new())).await
    }

    /// Join a cafe.
    pub async fn join(&self, query: &str) -> Result<Value> {
        call(self.client, &endpoints::CAFE_JOIN, with_query(query, Params::new())).await
    }

    /// Favourite a cafe.
    pub async fn favourite(&self, query: &str) -> Result<Value> {
        call(self.client, &endpoints::CAFE_FAVOURITE, with_query(query, Params::new())).await
    }

    /// Remove a cafe from favourites.
    pub async fn unfavourite(&self, query: &str) -> Result<Value> {
        call(self.client, &endpoints::CAFE_UNFAVOURITE, with_query(query, Params::new())).await
    }

    /// Notification settings for a cafe.
    pub async fn update_notifications(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::CAFE_UPDATE_NOTIFICATIONS, data).await
    }

    /// Set the welcome message.
    pub async fn update_welcome(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::CAFE_UPDATE_WELCOME, data).await
    }

    /// Set the cafe rules.
    pub async fn update_rules(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::CAFE_UPDATE_RULES, data).await
    }

    /// Set the cafe website.
    pub async fn update_website(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::CAFE_UPDATE_WEBSITE, data).await
    }
}
