//! High-level entry point.
//!
//! [`HeyCafe`] owns one [`HeyCafeClient`] and hands out resource groups that
//! borrow it, so every group shares the same connection pool and credentials.
//!
//! # Examples
//!
//! ```ignore
//! use heycafe::HeyCafe;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let hey = HeyCafe::with_api_key("your-key");
//!     let info = hey.account().info("hey").await?;
//!     hey.system().hello().await?;
//!     hey.cafe().info("python").await?;
//!     println!("{}", info);
//!     Ok(())
//! }
//! ```

use crate::client::HeyCafeClient;
use crate::config::ClientConfig;
use crate::resources::{
    AccountResource, BotResource, CafeResource, ChatResource, CommentResource,
    ConversationResource, ExploreResource, FeedResource, SearchResource, StatsResource,
    SystemResource, TempResource,
};

/// Hey.Cafe API grouped by resource.
#[derive(Debug, Clone, Default)]
pub struct HeyCafe {
    client: HeyCafeClient,
}

impl HeyCafe {
    /// Build from a configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self::from_client(HeyCafeClient::with_config(config))
    }

    /// Production API with an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::new(ClientConfig::default().with_api_key(api_key))
    }

    /// Wrap an existing transport.
    pub fn from_client(client: HeyCafeClient) -> Self {
        HeyCafe { client }
    }

    /// Transport for raw `execute`/`get`/`post` calls.
    pub fn client(&self) -> &HeyCafeClient {
        &self.client
    }

    /// hello, endpoints, emoji, reactions.
    pub fn system(&self) -> SystemResource<'_> {
        SystemResource::new(&self.client)
    }

    /// info, cafes, followers, follow.
    pub fn account(&self) -> AccountResource<'_> {
        AccountResource::new(&self.client)
    }

    /// info, conversations, members, join.
    pub fn cafe(&self) -> CafeResource<'_> {
        CafeResource::new(&self.client)
    }

    /// info, comments, create, edit, publish.
    pub fn conversation(&self) -> ConversationResource<'_> {
        ConversationResource::new(&self.client)
    }

    /// Comment info.
    pub fn comment(&self) -> CommentResource<'_> {
        CommentResource::new(&self.client)
    }

    /// list, info, messages, create, message_create.
    pub fn chat(&self) -> ChatResource<'_> {
        ChatResource::new(&self.client)
    }

    /// accounts, cafes, conversations, hot conversations.
    pub fn explore(&self) -> ExploreResource<'_> {
        ExploreResource::new(&self.client)
    }

    /// Feed conversations and tags.
    pub fn feed(&self) -> FeedResource<'_> {
        FeedResource::new(&self.client)
    }

    /// Search accounts, cafes, conversations.
    pub fn search(&self) -> SearchResource<'_> {
        SearchResource::new(&self.client)
    }

    /// Platform statistics.
    pub fn stats(&self) -> StatsResource<'_> {
        StatsResource::new(&self.client)
    }

    /// giphy, language, website meta.
    pub fn bot(&self) -> BotResource<'_> {
        BotResource::new(&self.client)
    }

    /// Temporary file uploads and previews.
    pub fn temp(&self) -> TempResource<'_> {
        TempResource::new(&self.client)
    }
}

impl From<HeyCafeClient> for HeyCafe {
    fn from(client: HeyCafeClient) -> Self {
        Self::from_client(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::FeedOptions;
    use crate::Params;

    fn anonymous() -> HeyCafe {
        // Unroutable host: any dispatched request would fail with a transport error.
        HeyCafe::new(ClientConfig::new("http://127.0.0.1:9").with_logging(false))
    }

    #[test]
    fn test_auth_required_without_network() {
        let hey = anonymous();
        let err = tokio_test::block_on(hey.account().cafes(Params::new())).unwrap_err();
        assert!(err.is_authentication_required());

        let err = tokio_test::block_on(hey.feed().conversations(FeedOptions::default())).unwrap_err();
        assert!(err.is_authentication_required());

        let err = tokio_test::block_on(hey.cafe().join("python")).unwrap_err();
        assert!(err.is_authentication_required());
    }

    #[test]
    fn test_with_api_key() {
        let hey = HeyCafe::with_api_key("test-api-key");
        assert!(hey.client().has_api_key());
        assert_eq!(hey.client().base_url(), "https://endpoint.hey.cafe");
    }
}
