use super::{call, with_query};
use crate::client::HeyCafeClient;
use crate::endpoints::{self, Endpoint};
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

/// Account endpoints.
///
/// Public lookups (`info`) work anonymously; everything acting on behalf of an
/// account needs a credential. `notifications` also accepts a session token.
#[derive(Debug, Clone, Copy)]
pub struct AccountResource<'a> {
    client: &'a HeyCafeClient,
}

impl<'a> AccountResource<'a> {
    pub(crate) fn new(client: &'a HeyCafeClient) -> Self {
        Self { client }
    }

    async fn by_query(&self, endpoint: &Endpoint, query: &str) -> Result<Value> {
        call(self.client, endpoint, with_query(query, Params::new())).await
    }

    /// Account info by alias or id.
    pub async fn info(&self, query: &str) -> Result<Value> {
        self.by_query(&endpoints::ACCOUNT_INFO, query).await
    }

    /// Cafes the account belongs to.
    pub async fn cafes(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_CAFES, params).await
    }

    /// Conversations posted by the account.
    pub async fn conversations(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_CONVERSATIONS, params).await
    }

    /// Followers of the account.
    pub async fn followers(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_FOLLOWERS, params).await
    }

    /// Accounts the account follows.
    pub async fn following(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_FOLLOWING, params).await
    }

    /// Mutual follows.
    pub async fn friends(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_FRIENDS, params).await
    }

    /// Details of the API key in use.
    pub async fn key(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_KEY, params).await
    }

    /// Muted accounts.
    pub async fn mutes(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_MUTES, params).await
    }

    /// Notifications. Accepts a session token.
    pub async fn notifications(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_NOTIFICATIONS, params).await
    }

    /// Referred accounts.
    pub async fn referrals(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_REFERRALS, params).await
    }

    /// Reports filed by the account.
    pub async fn reports(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_REPORTS, params).await
    }

    /// Preview an RSS import.
    pub async fn rssimport_preview(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_RSSIMPORT_PREVIEW, params).await
    }

    /// Follow an account.
    pub async fn follow(&self, query: &str) -> Result<Value> {
        self.by_query(&endpoints::ACCOUNT_FOLLOW, query).await
    }

    /// Unfollow an account.
    pub async fn unfollow(&self, query: &str) -> Result<Value> {
        self.by_query(&endpoints::ACCOUNT_UNFOLLOW, query).await
    }

    /// Subscribe to an account.
    pub async fn subscribe(&self, query: &str) -> Result<Value> {
        self.by_query(&endpoints::ACCOUNT_SUBSCRIBE, query).await
    }

    /// Unsubscribe from an account.
    pub async fn unsubscribe(&self, query: &str) -> Result<Value> {
        self.by_query(&endpoints::ACCOUNT_UNSUBSCRIBE, query).await
    }

    /// Hide or show cafe memberships.
    pub async fn update_ghost_cafes(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_UPDATE_GHOST_CAFES, data).await
    }

    /// Hide or show the account in explore.
    pub async fn update_ghost_explore(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_UPDATE_GHOST_EXPLORE, data).await
    }

    /// Hide or show followers.
    pub async fn update_ghost_followers(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_UPDATE_GHOST_FOLLOWERS, data).await
    }

    /// Hide or show followed accounts.
    pub async fn update_ghost_following(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_UPDATE_GHOST_FOLLOWING, data).await
    }

    /// Hide or show online status.
    pub async fn update_ghost_online(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_UPDATE_GHOST_ONLINE, data).await
    }

    /// Who may view the account.
    pub async fn update_public_view(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_UPDATE_PUBLIC_VIEW, data).await
    }

    /// Who may react to the account's posts.
    pub async fn update_public_react(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_UPDATE_PUBLIC_REACT, data).await
    }

    /// Who may comment on the account's posts.
    pub async fn update_public_comment(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_UPDATE_PUBLIC_COMMENT, data).await
    }

    /// Mark notifications as seen.
    pub async fn notification_seen(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::ACCOUNT_NOTIFICATION_SEEN, data).await
    }
}
