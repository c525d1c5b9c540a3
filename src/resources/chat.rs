use super::{call, with_query};
use crate::client::HeyCafeClient;
use crate::endpoints;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

/// Direct chat endpoints. All need a credential.
#[derive(Debug, Clone, Copy)]
pub struct ChatResource<'a> {
    client: &'a HeyCafeClient,
}

impl<'a> ChatResource<'a> {
    pub(crate) fn new(client: &'a HeyCafeClient) -> Self {
        Self { client }
    }

    /// Chat settings of the account.
    pub async fn account(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::CHAT_ACCOUNT, params).await
    }

    /// Chat info.
    pub async fn info(&self, query: &str, params: Params) -> Result<Value> {
        call(self.client, &endpoints::CHAT_INFO, with_query(query, params)).await
    }

    /// Chats the account takes part in.
    pub async fn list(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::CHAT_LIST, params).await
    }

    /// Messages in a chat.
    pub async fn messages(&self, query: &str, params: Params) -> Result<Value> {
        call(self.client, &endpoints::CHAT_MESSAGES, with_query(query, params)).await
    }

    /// Accept a chat invite.
    pub async fn accept(&self, query: &str) -> Result<Value> {
        call(self.client, &endpoints::CHAT_ACCEPT, with_query(query, Params::new())).await
    }

    /// Start a chat.
    pub async fn create(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::CHAT_CREATE, data).await
    }

    /// Invite accounts to a chat.
    pub async fn invite(&self, query: &str, data: Params) -> Result<Value> {
        call(self.client, &endpoints::CHAT_INVITE, with_query(query, data)).await
    }

    /// Leave a chat.
    pub async fn leave(&self, query: &str) -> Result<Value> {
        call(self.client, &endpoints::CHAT_LEAVE, with_query(query, Params::new())).await
    }

    /// Send a message to a chat.
    pub async fn message_create(&self, query: &str, data: Params) -> Result<Value> {
        call(self.client, &endpoints::CHAT_MESSAGE_CREATE, with_query(query, data)).await
    }

    /// Set the chat description.
    pub async fn update_description(&self, query: &str, data: Params) -> Result<Value> {
        call(self.client, &endpoints::CHAT_UPDATE_DESCRIPTION, with_query(query, data)).await
    }

    /// Set the chat emoji.
    pub async fn update_emoji(&self, query: &str, data: Params) -> Result<Value> {
        call(self.client, &endpoints::CHAT_UPDATE_EMOJI, with_query(query, data)).await
    }

    /// Rename a chat.
    pub async fn update_name(&self, query: &str, data: Params) -> Result<Value> {
        call(self.client, &endpoints::CHAT_UPDATE_NAME, with_query(query, data)).await
    }
}
