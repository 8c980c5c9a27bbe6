//! Gateway event types
//!
//! Event names carried in the `t` field of dispatch payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gateway event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayEventType {
    // Connection events
    /// Sent after a successful Identify
    Ready,
    /// Sent after a successful Resume
    Resumed,

    // Channel events
    ChannelCreate,
    ChannelUpdate,
    ChannelDelete,
    /// A message was pinned or unpinned
    ChannelPinsUpdate,

    // Thread events
    ThreadCreate,
    ThreadUpdate,
    ThreadDelete,
    /// Members were added to or removed from a thread
    ThreadMembersUpdate,

    // Guild events
    /// A guild integration was updated
    GuildIntegrationsUpdate,
    GuildRoleDelete,

    // Message events
    MessageCreate,
    MessageUpdate,

    // Auto moderation events
    AutoModerationRuleCreate,
    AutoModerationRuleUpdate,
    AutoModerationRuleDelete,
}

impl GatewayEventType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::Resumed => "RESUMED",
            Self::ChannelCreate => "CHANNEL_CREATE",
            Self::ChannelUpdate => "CHANNEL_UPDATE",
            Self::ChannelDelete => "CHANNEL_DELETE",
            Self::ChannelPinsUpdate => "CHANNEL_PINS_UPDATE",
            Self::ThreadCreate => "THREAD_CREATE",
            Self::ThreadUpdate => "THREAD_UPDATE",
            Self::ThreadDelete => "THREAD_DELETE",
            Self::ThreadMembersUpdate => "THREAD_MEMBERS_UPDATE",
            Self::GuildIntegrationsUpdate => "GUILD_INTEGRATIONS_UPDATE",
            Self::GuildRoleDelete => "GUILD_ROLE_DELETE",
            Self::MessageCreate => "MESSAGE_CREATE",
            Self::MessageUpdate => "MESSAGE_UPDATE",
            Self::AutoModerationRuleCreate => "AUTO_MODERATION_RULE_CREATE",
            Self::AutoModerationRuleUpdate => "AUTO_MODERATION_RULE_UPDATE",
            Self::AutoModerationRuleDelete => "AUTO_MODERATION_RULE_DELETE",
        }
    }

    /// Parse an event type from its wire name
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "READY" => Some(Self::Ready),
            "RESUMED" => Some(Self::Resumed),
            "CHANNEL_CREATE" => Some(Self::ChannelCreate),
            "CHANNEL_UPDATE" => Some(Self::ChannelUpdate),
            "CHANNEL_DELETE" => Some(Self::ChannelDelete),
            "CHANNEL_PINS_UPDATE" => Some(Self::ChannelPinsUpdate),
            "THREAD_CREATE" => Some(Self::ThreadCreate),
            "THREAD_UPDATE" => Some(Self::ThreadUpdate),
            "THREAD_DELETE" => Some(Self::ThreadDelete),
            "THREAD_MEMBERS_UPDATE" => Some(Self::ThreadMembersUpdate),
            "GUILD_INTEGRATIONS_UPDATE" => Some(Self::GuildIntegrationsUpdate),
            "GUILD_ROLE_DELETE" => Some(Self::GuildRoleDelete),
            "MESSAGE_CREATE" => Some(Self::MessageCreate),
            "MESSAGE_UPDATE" => Some(Self::MessageUpdate),
            "AUTO_MODERATION_RULE_CREATE" => Some(Self::AutoModerationRuleCreate),
            "AUTO_MODERATION_RULE_UPDATE" => Some(Self::AutoModerationRuleUpdate),
            "AUTO_MODERATION_RULE_DELETE" => Some(Self::AutoModerationRuleDelete),
            _ => None,
        }
    }
}

impl fmt::Display for GatewayEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<GatewayEventType> for String {
    fn from(event: GatewayEventType) -> Self {
        event.as_str().to_string()
    }
}
