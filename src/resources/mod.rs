//! Resource groups over [`HeyCafeClient`].
//!
//! Each group borrows the client and maps its methods one-to-one onto rows of
//! the [endpoint table](crate::endpoints). Required arguments are explicit;
//! optional extras travel in a [`Params`] bag and are sent as-is.
//!
//! | Group | Endpoints |
//! |-------|-----------|
//! | [`SystemResource`] | hello, endpoints, emoji, reactions, ip/email details |
//! | [`AccountResource`] | info, cafes, followers, notifications, follow, preferences |
//! | [`CafeResource`] | info, conversations, members, create, join, settings |
//! | [`ConversationResource`] | info, comments, create, edit, publish |
//! | [`CommentResource`] | info |
//! | [`ChatResource`] | list, info, messages, create, invite, message_create |
//! | [`ExploreResource`] | accounts, cafes, conversations, comments, hot |
//! | [`FeedResource`] | conversations, tags |
//! | [`SearchResource`] | accounts, cafes, conversations |
//! | [`StatsResource`] | platform counters |
//! | [`BotResource`] | giphy, language, website meta, safespace |
//! | [`TempResource`] | file upload, preview |

mod account;
mod bot;
mod cafe;
mod chat;
mod conversation;
mod explore;
mod feed;
mod search;
mod stats;
mod system;
mod temp;

pub use account::AccountResource;
pub use bot::BotResource;
pub use cafe::CafeResource;
pub use chat::ChatResource;
pub use conversation::{CommentResource, ConversationDraft, ConversationResource};
pub use explore::ExploreResource;
pub use feed::{FeedOptions, FeedResource};
pub use search::SearchResource;
pub use stats::StatsResource;
pub use system::SystemResource;
pub use temp::TempResource;

use crate::client::HeyCafeClient;
use crate::endpoints::Endpoint;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

async fn call(client: &HeyCafeClient, endpoint: &Endpoint, params: Params) -> Result<Value> {
    client.execute(&endpoint.request(params)).await
}

/// `query` first, caller extras layered on top.
fn with_query(query: &str, extra: Params) -> Params {
    let mut params = Params::new().with("query", query);
    params.extend(extra);
    params
}
