use super::call;
use crate::client::HeyCafeClient;
use crate::endpoints;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

/// Temporary uploads. Need a credential.
#[derive(Debug, Clone, Copy)]
pub struct TempResource<'a> {
    client: &'a HeyCafeClient,
}

impl<'a> TempResource<'a> {
    pub(crate) fn new(client: &'a HeyCafeClient) -> Self {
        Self { client }
    }

    /// Upload a temporary file; the returned id goes into
    /// [`ConversationDraft::file`](super::ConversationDraft::file).
    pub async fn file(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::TEMP_FILE, data).await
    }

    /// Create a link preview.
    pub async fn preview(&self, data: Params) -> Result<Value> {
        call(self.client, &endpoints::TEMP_PREVIEW, data).await
    }
}
