use super::{call, with_query};
use crate::client::{encode_content, HeyCafeClient};
use crate::endpoints;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

/// Fields of a new conversation.
///
/// Supply `content` (already base64), `content_raw` (plain text), or both.
/// With only `content_raw`, the encoded `content` is derived from it.
///
/// # Examples
///
/// ```
/// use heycafe::resources::ConversationDraft;
///
/// let draft = ConversationDraft::text("Hello").as_draft();
/// let params = draft.into_params("python");
/// assert_eq!(params.get("content").unwrap().to_string(), "SGVsbG8=");
/// assert_eq!(params.get("draft").unwrap().to_string(), "true");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationDraft {
    /// Base64-encoded body
    pub content: Option<String>,
    /// Plain-text body
    pub content_raw: Option<String>,
    /// File id returned by `post_temp_file`
    pub file: Option<String>,
    /// Remote image to attach
    pub image_url: Option<String>,
    /// Alt text for the attachment
    pub alt: Option<String>,
    /// Save without publishing
    pub draft: bool,
}

impl ConversationDraft {
    /// Plain-text conversation.
    pub fn text(content_raw: impl Into<String>) -> Self {
        ConversationDraft {
            content_raw: Some(content_raw.into()),
            ..Default::default()
        }
    }

    /// Attach a file uploaded through the temp endpoints.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Attach a remote image with optional alt text.
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>, alt: Option<String>) -> Self {
        self.image_url = Some(url.into());
        self.alt = alt;
        self
    }

    /// Save as an unpublished draft.
    #[must_use]
    pub fn as_draft(mut self) -> Self {
        self.draft = true;
        self
    }

    /// Form fields for `post_conversation_create` in `cafe`.
    pub fn into_params(self, cafe: &str) -> Params {
        let content = self
            .content
            .or_else(|| self.content_raw.as_deref().map(encode_content));

        let mut params = Params::new()
            .with("cafe", cafe)
            .with("content_raw", self.content_raw)
            .with("content", content)
            .with("file", self.file.filter(|f| !f.is_empty()))
            .with("image_url", self.image_url.filter(|u| !u.is_empty()))
            .with("alt", self.alt);
        if self.draft {
            params.set("draft", true);
        }
        params
    }
}

/// Conversation (post) endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ConversationResource<'a> {
    client: &'a HeyCafeClient,
}

impl<'a> ConversationResource<'a> {
    pub(crate) fn new(client: &'a HeyCafeClient) -> Self {
        Self { client }
    }

    /// Conversation info by id.
    pub async fn info(&self, query: &str) -> Result<Value> {
        call(self.client, &endpoints::CONVERSATION_INFO, with_query(query, Params::new())).await
    }

    /// Comments on a conversation.
    pub async fn comments(&self, query: &str, params: Params) -> Result<Value> {
        call(self.client, &endpoints::CONVERSATION_COMMENTS, with_query(query, params)).await
    }

    /// Post a new conversation in `cafe`.
    pub async fn create(&self, cafe: &str, draft: ConversationDraft) -> Result<Value> {
        call(self.client, &endpoints::CONVERSATION_CREATE, draft.into_params(cafe)).await
    }

    /// Edit a conversation.
    pub async fn edit(&self, query: &str, data: Params) -> Result<Value> {
        call(self.client, &endpoints::CONVERSATION_EDIT, with_query(query, data)).await
    }

    /// Publish a draft.
    pub async fn publish(&self, query: &str) -> Result<Value> {
        call(self.client, &endpoints::CONVERSATION_PUBLISH, with_query(query, Params::new())).await
    }
}

/// Comment endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CommentResource<'a> {
    client: &'a HeyCafeClient,
}

impl<'a> CommentResource<'a> {
    pub(crate) fn new(client: &'a HeyCafeClient) -> Self {
        Self { client }
    }

    /// Comment info by id.
    pub async fn info(&self, query: &str) -> Result<Value> {
        call(self.client, &endpoints::COMMENT_INFO, with_query(query, Params::new())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParamValue;

    #[test]
    fn test_raw_content_is_encoded() {
        let params = ConversationDraft::text("Hello").into_params("cafe1");
        assert_eq!(
            params.serialize(),
            vec![
                ("cafe".to_string(), "cafe1".to_string()),
                ("content_raw".to_string(), "Hello".to_string()),
                ("content".to_string(), "SGVsbG8=".to_string()),
            ]
        );
    }

    #[test]
    fn test_explicit_content_wins() {
        let draft = ConversationDraft {
            content: Some("ZXhwbGljaXQ=".to_string()),
            content_raw: Some("ignored for encoding".to_string()),
            ..Default::default()
        };
        let params = draft.into_params("cafe1");
        assert_eq!(params.get("content"), Some(&ParamValue::from("ZXhwbGljaXQ=")));
    }

    #[test]
    fn test_draft_flag_only_when_set() {
        let params = ConversationDraft::text("x").into_params("c");
        assert!(params.get("draft").is_none());
        let params = ConversationDraft::text("x").as_draft().into_params("c");
        assert_eq!(params.get("draft"), Some(&ParamValue::Bool(true)));
    }

    #[test]
    fn test_attachments() {
        let params = ConversationDraft::text("x")
            .with_file("")
            .with_image("https://img", Some("alt".into()))
            .into_params("c");
        let wire = params.serialize();
        assert!(!wire.iter().any(|(k, _)| k == "file"));
        assert!(wire.contains(&("image_url".to_string(), "https://img".to_string())));
        assert!(wire.contains(&("alt".to_string(), "alt".to_string())));
    }
}
