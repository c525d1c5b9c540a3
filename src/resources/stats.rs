use super::call;
use crate::client::HeyCafeClient;
use crate::endpoints::{self, Endpoint};
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

/// Platform-wide counters. Public, no parameters.
#[derive(Debug, Clone, Copy)]
pub struct StatsResource<'a> {
    client: &'a HeyCafeClient,
}

impl<'a> StatsResource<'a> {
    pub(crate) fn new(client: &'a HeyCafeClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value> {
        call(self.client, endpoint, Params::new()).await
    }

    /// Total accounts.
    pub async fn accounts(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS).await
    }

    /// Pro accounts.
    pub async fn accounts_pro(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_PRO).await
    }

    /// Verified accounts.
    pub async fn accounts_verified(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_VERIFIED).await
    }

    /// Accounts created today.
    pub async fn accounts_today(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_TODAY).await
    }

    /// Accounts created this week.
    pub async fn accounts_week(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_WEEK).await
    }

    /// Accounts created this month.
    pub async fn accounts_month(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_MONTH).await
    }

    /// Personal accounts.
    pub async fn accounts_type_person(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_TYPE_PERSON).await
    }

    /// Business accounts.
    pub async fn accounts_type_business(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_TYPE_BUSINESS).await
    }

    /// Bot accounts.
    pub async fn accounts_type_robot(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_TYPE_ROBOT).await
    }

    /// Creator accounts.
    pub async fn accounts_type_creator(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_TYPE_CREATOR).await
    }

    /// News accounts.
    pub async fn accounts_type_news(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_TYPE_NEWS).await
    }

    /// Active accounts.
    pub async fn accounts_status_active(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_STATUS_ACTIVE).await
    }

    /// Banned accounts.
    pub async fn accounts_status_banned(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_STATUS_BANNED).await
    }

    /// Deleted accounts.
    pub async fn accounts_status_deleted(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_STATUS_DELETED).await
    }

    /// Follow relationships.
    pub async fn accounts_follows(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_FOLLOWS).await
    }

    /// Notifications sent.
    pub async fn accounts_notifications(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_NOTIFICATIONS).await
    }

    /// Subscriptions.
    pub async fn accounts_subs(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_SUBS).await
    }

    /// Accounts online now.
    pub async fn accounts_online(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_ONLINE).await
    }

    /// Accounts online today.
    pub async fn accounts_online_today(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_ONLINE_TODAY).await
    }

    /// Accounts online this week.
    pub async fn accounts_online_week(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_ONLINE_WEEK).await
    }

    /// Accounts online this month.
    pub async fn accounts_online_month(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_ONLINE_MONTH).await
    }

    /// Account tags.
    pub async fn accounts_tags(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_ACCOUNTS_TAGS).await
    }

    /// Chats.
    pub async fn chats(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CHATS).await
    }

    /// Chat messages.
    pub async fn chats_messages(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CHATS_MESSAGES).await
    }

    /// Chat messages today.
    pub async fn chats_messages_today(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CHATS_MESSAGES_TODAY).await
    }

    /// Chat messages this week.
    pub async fn chats_messages_week(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CHATS_MESSAGES_WEEK).await
    }

    /// Chat messages this month.
    pub async fn chats_messages_month(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CHATS_MESSAGES_MONTH).await
    }

    /// Cafes.
    pub async fn cafes(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CAFES).await
    }

    /// Cafe memberships.
    pub async fn cafes_members(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CAFES_MEMBERS).await
    }

    /// Cafe tags.
    pub async fn cafes_tags(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CAFES_TAGS).await
    }

    /// Conversations in cafes.
    pub async fn cafes_conversations(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CAFES_CONVERSATIONS).await
    }

    /// Conversations.
    pub async fn conversations(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CONVERSATIONS).await
    }

    /// Tagged conversations.
    pub async fn conversations_tagged(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CONVERSATIONS_TAGGED).await
    }

    /// Reactions on conversations.
    pub async fn conversations_reactions(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CONVERSATIONS_REACTIONS).await
    }

    /// Conversations today.
    pub async fn conversations_today(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CONVERSATIONS_TODAY).await
    }

    /// Conversations this week.
    pub async fn conversations_week(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CONVERSATIONS_WEEK).await
    }

    /// Conversations this month.
    pub async fn conversations_month(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_CONVERSATIONS_MONTH).await
    }

    /// Comments.
    pub async fn comments(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_COMMENTS).await
    }

    /// Reactions on comments.
    pub async fn comments_reactions(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_COMMENTS_REACTIONS).await
    }

    /// Comments today.
    pub async fn comments_today(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_COMMENTS_TODAY).await
    }

    /// Comments this week.
    pub async fn comments_week(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_COMMENTS_WEEK).await
    }

    /// Comments this month.
    pub async fn comments_month(&self) -> Result<Value> {
        self.fetch(&endpoints::STATS_COMMENTS_MONTH).await
    }
}
