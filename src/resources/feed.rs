use super::call;
use crate::client::HeyCafeClient;
use crate::endpoints;
use crate::error::Result;
use crate::params::Params;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Filters for the conversation feed. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedOptions {
    /// Offset to start at
    pub start: Option<u32>,
    /// Number of items; the server defaults to 20
    pub count: Option<u32>,
    /// One of `all`, `notme`, `others`, `account`, `cafe`, `tag`, `clean`
    pub rule: Option<String>,
    /// Limit to this cafe
    pub cafe: Option<String>,
    /// Limit to this account
    pub account: Option<String>,
}

impl FeedOptions {
    fn into_params(self) -> Params {
        Params::new()
            .with("start", self.start)
            .with("count", self.count)
            .with("rule", self.rule.filter(|s| !s.is_empty()))
            .with("cafe", self.cafe.filter(|s| !s.is_empty()))
            .with("account", self.account.filter(|s| !s.is_empty()))
    }
}

/// Personalized feed. Accepts an API key or a session token.
#[derive(Debug, Clone, Copy)]
pub struct FeedResource<'a> {
    client: &'a HeyCafeClient,
}

impl<'a> FeedResource<'a> {
    pub(crate) fn new(client: &'a HeyCafeClient) -> Self {
        Self { client }
    }

    /// Feed conversations.
    pub async fn conversations(&self, options: FeedOptions) -> Result<Value> {
        call(self.client, &endpoints::FEED_CONVERSATIONS, options.into_params()).await
    }

    /// Feed tags.
    pub async fn tags(&self, params: Params) -> Result<Value> {
        call(self.client, &endpoints::FEED_TAGS, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_options_are_omitted() {
        let params = FeedOptions {
            count: Some(5),
            rule: Some(String::new()),
            cafe: Some("python".into()),
            ..Default::default()
        }
        .into_params();
        assert_eq!(
            params.serialize(),
            vec![
                ("count".to_string(), "5".to_string()),
                ("cafe".to_string(), "python".to_string()),
            ]
        );
    }

    #[test]
    fn test_start_zero_is_sent() {
        let params = FeedOptions { start: Some(0), ..Default::default() }.into_params();
        assert_eq!(params.serialize(), vec![("start".to_string(), "0".to_string())]);
    }

    #[test]
    fn test_options_from_json() {
        let options: FeedOptions =
            serde_json::from_value(serde_json::json!({"rule": "tag", "count": 10})).unwrap();
        assert_eq!(options.rule.as_deref(), Some("tag"));
        assert_eq!(options.count, Some(10));
        assert_eq!(options.start, None);
    }
}
