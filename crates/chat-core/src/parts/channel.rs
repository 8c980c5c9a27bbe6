//! Channel part - guild channels, DMs, and threads

use chat_mapper::{Mappable, MappedArray, TypeDescriptor};
use serde_json::Value;

use crate::enums::ChannelType;
use crate::parts::User;
use crate::value_objects::{Permissions, Snowflake, Timestamp};

/// Channel object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Channel {
    pub id: Snowflake,
    pub channel_type: Option<ChannelType>,
    pub guild_id: Option<Snowflake>,
    pub position: Option<i32>,
    pub permission_overwrites: Vec<Value>,
    pub name: Option<String>,
    pub topic: Option<String>,
    pub nsfw: Option<bool>,
    pub last_message_id: Option<Snowflake>,
    pub bitrate: Option<u32>,
    pub user_limit: Option<u32>,
    pub rate_limit_per_user: Option<u32>,
    pub recipients: MappedArray<User>,
    pub icon: Option<String>,
    pub owner_id: Option<Snowflake>,
    pub application_id: Option<Snowflake>,
    pub parent_id: Option<Snowflake>,
    pub last_pin_timestamp: Option<Timestamp>,
    pub rtc_region: Option<String>,
    pub message_count: Option<u32>,
    pub member_count: Option<u32>,
    pub thread_metadata: Option<Value>,
    pub member: Option<ThreadMember>,
    pub default_auto_archive_duration: Option<u32>,
    /// Computed permissions of the invoking user, only sent with interactions
    pub permissions: Option<Permissions>,
    pub flags: Option<u64>,
    pub total_message_sent: Option<u32>,
}

impl Channel {
    /// Check if this is a thread
    #[inline]
    #[must_use]
    pub fn is_thread(&self) -> bool {
        self.channel_type.is_some_and(ChannelType::is_thread)
    }

    /// Check if this is a DM or group DM
    #[inline]
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.channel_type.is_some_and(ChannelType::is_private)
    }

    /// Check if this channel has a parent category or, for threads, a parent channel
    #[inline]
    #[must_use]
    pub fn has_parent(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Message markup for this channel
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}

impl Mappable for Channel {
    const TYPE_NAME: &'static str = "Channel";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |channel: &mut Self, id| channel.id = id)
            .enumeration("type", |channel: &mut Self, kind| channel.channel_type = kind)
            .scalar("guild_id", |channel: &mut Self, id| channel.guild_id = id)
            .scalar("position", |channel: &mut Self, position| channel.position = position)
            .array("permission_overwrites", |channel: &mut Self, overwrites| {
                channel.permission_overwrites = overwrites;
            })
            .scalar("name", |channel: &mut Self, name| channel.name = name)
            .scalar("topic", |channel: &mut Self, topic| channel.topic = topic)
            .scalar("nsfw", |channel: &mut Self, nsfw| channel.nsfw = nsfw)
            .scalar("last_message_id", |channel: &mut Self, id| channel.last_message_id = id)
            .scalar("bitrate", |channel: &mut Self, bitrate| channel.bitrate = bitrate)
            .scalar("user_limit", |channel: &mut Self, limit| channel.user_limit = limit)
            .scalar("rate_limit_per_user", |channel: &mut Self, seconds| {
                channel.rate_limit_per_user = seconds;
            })
            .object_array("recipients", |channel: &mut Self, users| channel.recipients = users)
            .scalar("icon", |channel: &mut Self, icon| channel.icon = icon)
            .scalar("owner_id", |channel: &mut Self, id| channel.owner_id = id)
            .scalar("application_id", |channel: &mut Self, id| channel.application_id = id)
            .scalar("parent_id", |channel: &mut Self, id| channel.parent_id = id)
            .object("last_pin_timestamp", |channel: &mut Self, at| {
                channel.last_pin_timestamp = at;
            })
            .scalar("rtc_region", |channel: &mut Self, region| channel.rtc_region = region)
            .scalar("message_count", |channel: &mut Self, count| channel.message_count = count)
            .scalar("member_count", |channel: &mut Self, count| channel.member_count = count)
            .union("thread_metadata", |channel: &mut Self, metadata| {
                channel.thread_metadata = metadata;
            })
            .object("member", |channel: &mut Self, member| channel.member = member)
            .scalar("default_auto_archive_duration", |channel: &mut Self, minutes| {
                channel.default_auto_archive_duration = minutes;
            })
            .object("permissions", |channel: &mut Self, permissions| {
                channel.permissions = permissions;
            })
            .scalar("flags", |channel: &mut Self, flags| channel.flags = flags)
            .scalar("total_message_sent", |channel: &mut Self, total| {
                channel.total_message_sent = total;
            })
            .build()
    }
}

/// Membership of a user in a thread
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreadMember {
    pub id: Option<Snowflake>,
    pub user_id: Option<Snowflake>,
    pub join_timestamp: Option<Timestamp>,
    pub flags: u64,
}

impl Mappable for ThreadMember {
    const TYPE_NAME: &'static str = "ThreadMember";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |member: &mut Self, id| member.id = id)
            .scalar("user_id", |member: &mut Self, id| member.user_id = id)
            .object("join_timestamp", |member: &mut Self, at| member.join_timestamp = at)
            .scalar("flags", |member: &mut Self, flags| member.flags = flags)
            .build()
    }
}
