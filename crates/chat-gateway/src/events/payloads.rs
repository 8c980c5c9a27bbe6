//! Event payload definitions
//!
//! Typed `d` data of dispatch events that have no counterpart among the
//! REST parts. Events such as `MESSAGE_CREATE` or `CHANNEL_UPDATE` carry a
//! plain part (`Message`, `Channel`) instead.

use chat_core::{AutoModerationRule, ChannelType, Message, Snowflake, ThreadMember, Timestamp, User};
use chat_mapper::{Mappable, MappedArray, TypeDescriptor};
use serde_json::Value;

use super::GatewayEventType;

/// A type delivered by exactly one dispatch event
///
/// Types shared by several events (a `Channel` for create, update and
/// delete) are registered per event type on the dispatcher instead.
pub trait GatewayEvent: Mappable {
    const EVENT_TYPE: GatewayEventType;
}

// === Connection Events ===

/// READY event payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadyEvent {
    /// Gateway protocol version
    pub v: u8,
    pub user: Option<User>,
    pub guilds: MappedArray<UnavailableGuild>,
    /// Session ID for resuming
    pub session_id: String,
    pub resume_gateway_url: Option<String>,
    /// `[shard_id, num_shards]`
    pub shard: Option<Vec<u32>>,
    pub application: Option<Value>,
}

impl Mappable for ReadyEvent {
    const TYPE_NAME: &'static str = "ReadyEvent";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("v", |ready: &mut Self, version| ready.v = version)
            .object("user", |ready: &mut Self, user| ready.user = user)
            .object_array("guilds", |ready: &mut Self, guilds| ready.guilds = guilds)
            .scalar("session_id", |ready: &mut Self, id| ready.session_id = id)
            .scalar("resume_gateway_url", |ready: &mut Self, url| {
                ready.resume_gateway_url = url;
            })
            .array("shard", |ready: &mut Self, shard| ready.shard = shard)
            .union("application", |ready: &mut Self, application| {
                ready.application = application;
            })
            .build()
    }
}

impl GatewayEvent for ReadyEvent {
    const EVENT_TYPE: GatewayEventType = GatewayEventType::Ready;
}

/// Guild listed in READY before its GUILD_CREATE arrives
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnavailableGuild {
    pub id: Snowflake,
    pub unavailable: bool,
}

impl Mappable for UnavailableGuild {
    const TYPE_NAME: &'static str = "UnavailableGuild";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |guild: &mut Self, id| guild.id = id)
            .scalar("unavailable", |guild: &mut Self, unavailable| {
                guild.unavailable = unavailable;
            })
            .build()
    }
}

// === Channel Events ===

/// CHANNEL_PINS_UPDATE event payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelPinsUpdateEvent {
    pub guild_id: Option<Snowflake>,
    pub channel_id: Snowflake,
    /// Unset when the last pin was removed
    pub last_pin_timestamp: Option<Timestamp>,
}

impl Mappable for ChannelPinsUpdateEvent {
    const TYPE_NAME: &'static str = "ChannelPinsUpdateEvent";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("guild_id", |event: &mut Self, id| event.guild_id = id)
            .scalar("channel_id", |event: &mut Self, id| event.channel_id = id)
            .object("last_pin_timestamp", |event: &mut Self, timestamp| {
                event.last_pin_timestamp = timestamp;
            })
            .build()
    }
}

impl GatewayEvent for ChannelPinsUpdateEvent {
    const EVENT_TYPE: GatewayEventType = GatewayEventType::ChannelPinsUpdate;
}

// === Thread Events ===

/// THREAD_DELETE event payload
///
/// Only the identifying fields of the deleted thread are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreadDeleteEvent {
    pub id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub parent_id: Option<Snowflake>,
    pub channel_type: Option<ChannelType>,
}

impl Mappable for ThreadDeleteEvent {
    const TYPE_NAME: &'static str = "ThreadDeleteEvent";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |event: &mut Self, id| event.id = id)
            .scalar("guild_id", |event: &mut Self, id| event.guild_id = id)
            .scalar("parent_id", |event: &mut Self, id| event.parent_id = id)
            .enumeration("type", |event: &mut Self, kind| event.channel_type = kind)
            .build()
    }
}

impl GatewayEvent for ThreadDeleteEvent {
    const EVENT_TYPE: GatewayEventType = GatewayEventType::ThreadDelete;
}

/// THREAD_MEMBERS_UPDATE event payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreadMembersUpdateEvent {
    /// Thread id
    pub id: Snowflake,
    pub guild_id: Option<Snowflake>,
    /// Approximate count, stops counting at 50
    pub member_count: u32,
    pub added_members: MappedArray<ThreadMember>,
    pub removed_member_ids: Vec<Snowflake>,
}

impl ThreadMembersUpdateEvent {
    /// Whether `user_id` was added to the thread by this update
    #[must_use]
    pub fn added(&self, user_id: Snowflake) -> bool {
        self.added_members
            .values()
            .any(|member| member.user_id == Some(user_id))
    }

    #[must_use]
    pub fn removed(&self, user_id: Snowflake) -> bool {
        self.removed_member_ids.contains(&user_id)
    }
}

impl Mappable for ThreadMembersUpdateEvent {
    const TYPE_NAME: &'static str = "ThreadMembersUpdateEvent";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |event: &mut Self, id| event.id = id)
            .scalar("guild_id", |event: &mut Self, id| event.guild_id = id)
            .scalar("member_count", |event: &mut Self, count| event.member_count = count)
            .object_array("added_members", |event: &mut Self, members| {
                event.added_members = members;
            })
            .array("removed_member_ids", |event: &mut Self, ids| event.removed_member_ids = ids)
            .build()
    }
}

impl GatewayEvent for ThreadMembersUpdateEvent {
    const EVENT_TYPE: GatewayEventType = GatewayEventType::ThreadMembersUpdate;
}

// === Guild Events ===

/// GUILD_INTEGRATIONS_UPDATE event payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuildIntegrationsUpdateEvent {
    pub guild_id: Snowflake,
}

impl Mappable for GuildIntegrationsUpdateEvent {
    const TYPE_NAME: &'static str = "GuildIntegrationsUpdateEvent";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("guild_id", |event: &mut Self, id| event.guild_id = id)
            .build()
    }
}

impl GatewayEvent for GuildIntegrationsUpdateEvent {
    const EVENT_TYPE: GatewayEventType = GatewayEventType::GuildIntegrationsUpdate;
}

/// GUILD_ROLE_DELETE event payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuildRoleDeleteEvent {
    pub guild_id: Snowflake,
    pub role_id: Snowflake,
}

impl Mappable for GuildRoleDeleteEvent {
    const TYPE_NAME: &'static str = "GuildRoleDeleteEvent";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("guild_id", |event: &mut Self, id| event.guild_id = id)
            .scalar("role_id", |event: &mut Self, id| event.role_id = id)
            .build()
    }
}

impl GatewayEvent for GuildRoleDeleteEvent {
    const EVENT_TYPE: GatewayEventType = GatewayEventType::GuildRoleDelete;
}

// === Parts delivered by a single event ===

impl GatewayEvent for Message {
    const EVENT_TYPE: GatewayEventType = GatewayEventType::MessageCreate;
}

impl GatewayEvent for AutoModerationRule {
    const EVENT_TYPE: GatewayEventType = GatewayEventType::AutoModerationRuleCreate;
}
