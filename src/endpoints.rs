//! Static registry of Hey.Cafe endpoints.
//!
//! Each entry records the endpoint name, HTTP verb, whether a credential is
//! required, whether a session token may stand in for the API key, and the
//! parameter names the API documents for it. An empty parameter list means the
//! endpoint takes free-form options.
//!
//! The transport never validates parameters against this table; it is the
//! source the resource façade builds descriptors from.
//!
//! # Examples
//!
//! ```
//! use heycafe::endpoints::{self, Endpoint};
//! use heycafe::{Method, Params};
//!
//! let ep: &Endpoint = endpoints::lookup("get_feed_conversations").unwrap();
//! assert_eq!(ep.method, Method::Get);
//! assert!(ep.requires_auth && ep.session_eligible);
//!
//! let request = ep.request(Params::new().with("count", 10u32));
//! assert!(request.session_eligible);
//! ```

use crate::params::Params;
use crate::types::{Method, RequestDescriptor};

/// One row of the endpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Name appended to the base URL
    pub name: &'static str,
    /// HTTP verb
    pub method: Method,
    /// A credential must be configured
    pub requires_auth: bool,
    /// A session token is accepted in place of an API key
    pub session_eligible: bool,
    /// Documented parameter names
    pub params: &'static [&'static str],
}

impl Endpoint {
    const fn get(name: &'static str, params: &'static [&'static str]) -> Self {
        Endpoint {
            name,
            method: Method::Get,
            requires_auth: false,
            session_eligible: false,
            params,
        }
    }

    const fn post(name: &'static str, params: &'static [&'static str]) -> Self {
        Endpoint {
            method: Method::Post,
            ..Self::get(name, params)
        }
    }

    const fn public(self) -> Self {
        self
    }

    const fn auth(self) -> Self {
        Endpoint {
            requires_auth: true,
            ..self
        }
    }

    const fn session(self) -> Self {
        Endpoint {
            requires_auth: true,
            session_eligible: true,
            ..self
        }
    }

    /// Whether `param` is one of the documented parameters.
    pub fn accepts(&self, param: &str) -> bool {
        self.params.contains(&param)
    }

    /// Build a descriptor carrying `params`: query string for GET, form body for POST.
    pub fn request(&self, params: Params) -> RequestDescriptor {
        let mut request = RequestDescriptor::new(self.name, self.method);
        match self.method {
            Method::Get => request.query = params,
            Method::Post => request.body = Some(params),
        }
        request.requires_auth = self.requires_auth;
        request.session_eligible = self.session_eligible;
        request
    }
}

macro_rules! endpoint_table {
    ($($konst:ident => $method:ident $name:literal, $access:ident, [$($p:literal),*];)*) => {
        $(
            #[allow(missing_docs)]
            pub const $konst: Endpoint = Endpoint::$method($name, &[$($p),*]).$access();
        )*

        /// Every known endpoint.
        pub static ENDPOINTS: &[Endpoint] = &[$($konst),*];
    };
}

endpoint_table! {
    // System
    SYSTEM_HELLO => get "get_system_hello", public, [];
    SYSTEM_ENDPOINTS => get "get_system_endpoints", public, [];
    SYSTEM_EMOJI_CATEGORY => get "get_system_emoji_category", public, [];
    SYSTEM_EMOJI_SEARCH => get "get_system_emoji_search", public, ["query"];
    SYSTEM_EMOJI_LOOKUP => get "get_system_emoji_lookup", public, [];
    SYSTEM_REACTIONS => get "get_system_reactions", public, [];
    SYSTEM_IP_DETAILS => get "get_system_ip_details", public, [];
    SYSTEM_EMAIL_DETAILS => get "get_system_email_details", public, [];

    // Account
    ACCOUNT_INFO => get "get_account_info", public, ["query"];
    ACCOUNT_CAFES => get "get_account_cafes", auth, [];
    ACCOUNT_CONVERSATIONS => get "get_account_conversations", auth, [];
    ACCOUNT_FOLLOWERS => get "get_account_followers", auth, [];
    ACCOUNT_FOLLOWING => get "get_account_following", auth, [];
    ACCOUNT_FRIENDS => get "get_account_friends", auth, [];
    ACCOUNT_KEY => get "get_account_key", auth, [];
    ACCOUNT_MUTES => get "get_account_mutes", auth, [];
    ACCOUNT_NOTIFICATIONS => get "get_account_notifications", session, [];
    ACCOUNT_REFERRALS => get "get_account_referrals", auth, [];
    ACCOUNT_REPORTS => get "get_account_reports", auth, [];
    ACCOUNT_RSSIMPORT_PREVIEW => get "get_account_rssimport_preview", auth, [];
    ACCOUNT_FOLLOW => post "post_account_follow", auth, ["query"];
    ACCOUNT_UNFOLLOW => post "post_account_unfollow", auth, ["query"];
    ACCOUNT_SUBSCRIBE => post "post_account_subscribe", auth, ["query"];
    ACCOUNT_UNSUBSCRIBE => post "post_account_unsubscribe", auth, ["query"];
    ACCOUNT_UPDATE_GHOST_CAFES => post "post_account_update_ghost_cafes", auth, [];
    ACCOUNT_UPDATE_GHOST_EXPLORE => post "post_account_update_ghost_explore", auth, [];
    ACCOUNT_UPDATE_GHOST_FOLLOWERS => post "post_account_update_ghost_followers", auth, [];
    ACCOUNT_UPDATE_GHOST_FOLLOWING => post "post_account_update_ghost_following", auth, [];
    ACCOUNT_UPDATE_GHOST_ONLINE => post "post_account_update_ghost_online", auth, [];
    ACCOUNT_UPDATE_PUBLIC_VIEW => post "post_account_update_public_view", auth, [];
    ACCOUNT_UPDATE_PUBLIC_REACT => post "post_account_update_public_react", auth, [];
    ACCOUNT_UPDATE_PUBLIC_COMMENT => post "post_account_update_public_comment", auth, [];
    ACCOUNT_NOTIFICATION_SEEN => post "post_account_notification_seen", auth, [];

    // Cafe
    CAFE_INFO => get "get_cafe_info", public, ["query"];
    CAFE_CONVERSATIONS => get "get_cafe_conversations", public, ["query"];
    CAFE_MEMBERS => get "get_cafe_members", public, ["query"];
    CAFE_CREATE => post "post_cafe_create", auth, [];
    CAFE_DELETE => post "post_cafe_delete", auth, ["query"];
    CAFE_JOIN => post "post_cafe_join", auth, ["query"];
    CAFE_FAVOURITE => post "post_cafe_favourite", auth, ["query"];
    CAFE_UNFAVOURITE => post "post_cafe_unfavourite", auth, ["query"];
    CAFE_UPDATE_NOTIFICATIONS => post "post_cafe_update_notifications", auth, [];
    CAFE_UPDATE_WELCOME => post "post_cafe_update_welcome", auth, [];
    CAFE_UPDATE_RULES => post "post_cafe_update_rules", auth, [];
    CAFE_UPDATE_WEBSITE => post "post_cafe_update_website", auth, [];

    // Conversation
    CONVERSATION_INFO => get "get_conversation_info", public, ["query"];
    CONVERSATION_COMMENTS => get "get_conversation_comments", public, ["query"];
    CONVERSATION_CREATE => post "post_conversation_create", auth,
        ["cafe", "content", "content_raw", "file", "image_url", "alt", "draft"];
    CONVERSATION_EDIT => post "post_conversation_edit", auth, ["query"];
    CONVERSATION_PUBLISH => post "post_conversation_publish", auth, ["query"];

    // Comment
    COMMENT_INFO => get "get_comment_info", public, ["query"];

    // Chat
    CHAT_ACCOUNT => get "get_chat_account", auth, [];
    CHAT_INFO => get "get_chat_info", auth, ["query"];
    CHAT_LIST => get "get_chat_list", auth, [];
    CHAT_MESSAGES => get "get_chat_messages", auth, ["query"];
    CHAT_ACCEPT => post "post_chat_accept", auth, ["query"];
    CHAT_CREATE => post "post_chat_create", auth, [];
    CHAT_INVITE => post "post_chat_invite", auth, ["query"];
    CHAT_LEAVE => post "post_chat_leave", auth, ["query"];
    CHAT_MESSAGE_CREATE => post "post_chat_message_create", auth, ["query"];
    CHAT_UPDATE_DESCRIPTION => post "post_chat_update_description", auth, ["query"];
    CHAT_UPDATE_EMOJI => post "post_chat_update_emoji", auth, ["query"];
    CHAT_UPDATE_NAME => post "post_chat_update_name", auth, ["query"];

    // Explore
    EXPLORE_ACCOUNTS => get "get_explore_accounts", public, [];
    EXPLORE_CAFES => get "get_explore_cafes", public, [];
    EXPLORE_CONVERSATIONS => get "get_explore_conversations", public, [];
    EXPLORE_COMMENTS => get "get_explore_comments", public, [];
    EXPLORE_HOT_CONVERSATIONS => get "get_explore_hot_conversations", public, [];

    // Feed
    FEED_CONVERSATIONS => get "get_feed_conversations", session,
        ["start", "count", "rule", "cafe", "account"];
    FEED_TAGS => get "get_feed_tags", session, [];

    // Search
    SEARCH_ACCOUNTS => get "get_search_accounts", public, ["query"];
    SEARCH_CAFES => get "get_search_cafes", public, ["query"];
    SEARCH_CONVERSATIONS => get "get_search_conversations", public, ["query"];

    // Stats
    STATS_ACCOUNTS => get "get_stats_accounts", public, [];
    STATS_ACCOUNTS_PRO => get "get_stats_accounts_pro", public, [];
    STATS_ACCOUNTS_VERIFIED => get "get_stats_accounts_verified", public, [];
    STATS_ACCOUNTS_TODAY => get "get_stats_accounts_today", public, [];
    STATS_ACCOUNTS_WEEK => get "get_stats_accounts_week", public, [];
    STATS_ACCOUNTS_MONTH => get "get_stats_accounts_month", public, [];
    STATS_ACCOUNTS_TYPE_PERSON => get "get_stats_accounts_type_person", public, [];
    STATS_ACCOUNTS_TYPE_BUSINESS => get "get_stats_accounts_type_business", public, [];
    STATS_ACCOUNTS_TYPE_ROBOT => get "get_stats_accounts_type_robot", public, [];
    STATS_ACCOUNTS_TYPE_CREATOR => get "get_stats_accounts_type_creator", public, [];
    STATS_ACCOUNTS_TYPE_NEWS => get "get_stats_accounts_type_news", public, [];
    STATS_ACCOUNTS_STATUS_ACTIVE => get "get_stats_accounts_status_active", public, [];
    STATS_ACCOUNTS_STATUS_BANNED => get "get_stats_accounts_status_banned", public, [];
    STATS_ACCOUNTS_STATUS_DELETED => get "get_stats_accounts_status_deleted", public, [];
    STATS_ACCOUNTS_FOLLOWS => get "get_stats_accounts_follows", public, [];
    STATS_ACCOUNTS_NOTIFICATIONS => get "get_stats_accounts_notifications", public, [];
    STATS_ACCOUNTS_SUBS => get "get_stats_accounts_subs", public, [];
    STATS_ACCOUNTS_ONLINE => get "get_stats_accounts_online", public, [];
    STATS_ACCOUNTS_ONLINE_TODAY => get "get_stats_accounts_online_today", public, [];
    STATS_ACCOUNTS_ONLINE_WEEK => get "get_stats_accounts_online_week", public, [];
    STATS_ACCOUNTS_ONLINE_MONTH => get "get_stats_accounts_online_month", public, [];
    STATS_ACCOUNTS_TAGS => get "get_stats_accounts_tags", public, [];
    STATS_CHATS => get "get_stats_chats", public, [];
    STATS_CHATS_MESSAGES => get "get_stats_chats_messages", public, [];
    STATS_CHATS_MESSAGES_TODAY => get "get_stats_chats_messages_today", public, [];
    STATS_CHATS_MESSAGES_WEEK => get "get_stats_chats_messages_week", public, [];
    STATS_CHATS_MESSAGES_MONTH => get "get_stats_chats_messages_month", public, [];
    STATS_CAFES => get "get_stats_cafes", public, [];
    STATS_CAFES_MEMBERS => get "get_stats_cafes_members", public, [];
    STATS_CAFES_TAGS => get "get_stats_cafes_tags", public, [];
    STATS_CAFES_CONVERSATIONS => get "get_stats_cafes_conversations", public, [];
    STATS_CONVERSATIONS => get "get_stats_conversations", public, [];
    STATS_CONVERSATIONS_TAGGED => get "get_stats_conversations_tagged", public, [];
    STATS_CONVERSATIONS_REACTIONS => get "get_stats_conversations_reactions", public, [];
    STATS_CONVERSATIONS_TODAY => get "get_stats_conversations_today", public, [];
    STATS_CONVERSATIONS_WEEK => get "get_stats_conversations_week", public, [];
    STATS_CONVERSATIONS_MONTH => get "get_stats_conversations_month", public, [];
    STATS_COMMENTS => get "get_stats_comments", public, [];
    STATS_COMMENTS_REACTIONS => get "get_stats_comments_reactions", public, [];
    STATS_COMMENTS_TODAY => get "get_stats_comments_today", public, [];
    STATS_COMMENTS_WEEK => get "get_stats_comments_week", public, [];
    STATS_COMMENTS_MONTH => get "get_stats_comments_month", public, [];

    // Bot
    BOT_GIPHY_SEARCH => get "get_bot_giphy_search", public, ["query"];
    BOT_LANGUAGE_DETECT => get "get_bot_language_detect", public, [];
    BOT_LANGUAGE_TRANSLATE => get "get_bot_language_translate", public, [];
    BOT_WEBSITE_META => get "get_bot_website_meta", public, [];
    BOT_SAFESPACE_TEXT => get "get_bot_safespace_text", public, [];

    // Temp
    TEMP_FILE => post "post_temp_file", auth, [];
    TEMP_PREVIEW => post "post_temp_preview", auth, [];
}

/// Find an endpoint by name.
pub fn lookup(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.name == name)
}
