//! Message part and the smaller parts only found inside messages

use chat_mapper::{Mappable, MappedArray, TypeDescriptor};
use serde_json::Value;

use crate::enums::{ChannelType, MessageActivityType, MessageType};
use crate::parts::{Channel, Embed, Emoji, User};
use crate::value_objects::{MessageFlags, Snowflake, Timestamp};

/// Message object, as returned by REST and carried by `MESSAGE_CREATE`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub author: Option<User>,
    pub member: Option<Value>,
    pub content: String,
    pub timestamp: Option<Timestamp>,
    pub edited_timestamp: Option<Timestamp>,
    pub tts: bool,
    pub mention_everyone: bool,
    pub mentions: MappedArray<User>,
    pub mention_roles: Vec<Snowflake>,
    pub mention_channels: MappedArray<ChannelMention>,
    pub attachments: MappedArray<Attachment>,
    pub embeds: MappedArray<Embed>,
    pub reactions: MappedArray<Reaction>,
    /// Integer or string, whatever the sender used
    pub nonce: Option<Value>,
    pub pinned: bool,
    pub webhook_id: Option<Snowflake>,
    pub message_type: Option<MessageType>,
    pub activity: Option<MessageActivity>,
    pub application: Option<Value>,
    pub application_id: Option<Snowflake>,
    pub message_reference: Option<MessageReference>,
    pub flags: Option<MessageFlags>,
    pub referenced_message: Option<Box<Message>>,
    pub interaction: Option<Value>,
    pub thread: Option<Channel>,
    pub components: Vec<Value>,
    pub sticker_items: Vec<Value>,
    pub position: Option<u32>,
}

impl Message {
    /// Whether this message replies to another one
    #[must_use]
    pub fn is_reply(&self) -> bool {
        self.message_type == Some(MessageType::Reply)
    }

    #[must_use]
    pub fn is_edited(&self) -> bool {
        self.edited_timestamp.is_some()
    }

    /// Id of the message this one points at, if any
    #[must_use]
    pub fn reference_id(&self) -> Option<Snowflake> {
        self.message_reference
            .as_ref()
            .and_then(|reference| reference.message_id)
    }

    /// Whether `user_id` was mentioned directly
    #[must_use]
    pub fn mentions_user(&self, user_id: Snowflake) -> bool {
        self.mentions.values().any(|user| user.id == user_id)
    }

    #[must_use]
    pub fn has_flag(&self, flag: MessageFlags) -> bool {
        self.flags.is_some_and(|flags| flags.contains(flag))
    }
}

impl Mappable for Message {
    const TYPE_NAME: &'static str = "Message";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |message: &mut Self, id| message.id = id)
            .scalar("channel_id", |message: &mut Self, id| message.channel_id = id)
            .scalar("guild_id", |message: &mut Self, id| message.guild_id = id)
            .object("author", |message: &mut Self, author| message.author = author)
            .union("member", |message: &mut Self, member| message.member = member)
            .scalar("content", |message: &mut Self, content| message.content = content)
            .object("timestamp", |message: &mut Self, at| message.timestamp = at)
            .object("edited_timestamp", |message: &mut Self, at| message.edited_timestamp = at)
            .scalar("tts", |message: &mut Self, tts| message.tts = tts)
            .scalar("mention_everyone", |message: &mut Self, everyone| {
                message.mention_everyone = everyone;
            })
            .object_array("mentions", |message: &mut Self, users| message.mentions = users)
            .array("mention_roles", |message: &mut Self, roles| message.mention_roles = roles)
            .object_array("mention_channels", |message: &mut Self, channels| {
                message.mention_channels = channels;
            })
            .object_array("attachments", |message: &mut Self, files| message.attachments = files)
            .object_array("embeds", |message: &mut Self, embeds| message.embeds = embeds)
            .object_array("reactions", |message: &mut Self, reactions| {
                message.reactions = reactions;
            })
            .union("nonce", |message: &mut Self, nonce| message.nonce = nonce)
            .scalar("pinned", |message: &mut Self, pinned| message.pinned = pinned)
            .scalar("webhook_id", |message: &mut Self, id| message.webhook_id = id)
            .enumeration("type", |message: &mut Self, kind| message.message_type = kind)
            .object("activity", |message: &mut Self, activity| message.activity = activity)
            .union("application", |message: &mut Self, app| message.application = app)
            .scalar("application_id", |message: &mut Self, id| message.application_id = id)
            .object("message_reference", |message: &mut Self, reference| {
                message.message_reference = reference;
            })
            .object("flags", |message: &mut Self, flags| message.flags = flags)
            .object("referenced_message", |message: &mut Self, referenced: Option<Message>| {
                message.referenced_message = referenced.map(Box::new);
            })
            .union("interaction", |message: &mut Self, interaction| {
                message.interaction = interaction;
            })
            .object("thread", |message: &mut Self, thread| message.thread = thread)
            .array("components", |message: &mut Self, components| message.components = components)
            .array("sticker_items", |message: &mut Self, items| message.sticker_items = items)
            .scalar("position", |message: &mut Self, position| message.position = position)
            .build()
    }
}

/// Rich presence activity attached to a message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageActivity {
    pub activity_type: Option<MessageActivityType>,
    pub party_id: Option<String>,
}

impl Mappable for MessageActivity {
    const TYPE_NAME: &'static str = "MessageActivity";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .enumeration("type", |activity: &mut Self, kind| activity.activity_type = kind)
            .scalar("party_id", |activity: &mut Self, party| activity.party_id = party)
            .build()
    }
}

/// Pointer to another message (replies, crossposts, pins)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageReference {
    pub message_id: Option<Snowflake>,
    pub channel_id: Option<Snowflake>,
    pub guild_id: Option<Snowflake>,
    pub fail_if_not_exists: Option<bool>,
}

impl Mappable for MessageReference {
    const TYPE_NAME: &'static str = "MessageReference";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("message_id", |reference: &mut Self, id| reference.message_id = id)
            .scalar("channel_id", |reference: &mut Self, id| reference.channel_id = id)
            .scalar("guild_id", |reference: &mut Self, id| reference.guild_id = id)
            .scalar("fail_if_not_exists", |reference: &mut Self, fail| {
                reference.fail_if_not_exists = fail;
            })
            .build()
    }
}

/// File attached to a message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attachment {
    pub id: Snowflake,
    pub filename: String,
    pub description: Option<String>,
    pub content_type: Option<String>,
    pub size: u64,
    pub url: String,
    pub proxy_url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub ephemeral: Option<bool>,
}

impl Attachment {
    /// Check if attachment is an image
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_ref()
            .is_some_and(|content_type| content_type.starts_with("image/"))
    }

    /// Check if attachment is a video
    pub fn is_video(&self) -> bool {
        self.content_type
            .as_ref()
            .is_some_and(|content_type| content_type.starts_with("video/"))
    }
}

impl Mappable for Attachment {
    const TYPE_NAME: &'static str = "Attachment";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |file: &mut Self, id| file.id = id)
            .scalar("filename", |file: &mut Self, name| file.filename = name)
            .scalar("description", |file: &mut Self, text| file.description = text)
            .scalar("content_type", |file: &mut Self, mime| file.content_type = mime)
            .scalar("size", |file: &mut Self, size| file.size = size)
            .scalar("url", |file: &mut Self, url| file.url = url)
            .scalar("proxy_url", |file: &mut Self, url| file.proxy_url = url)
            .scalar("height", |file: &mut Self, height| file.height = height)
            .scalar("width", |file: &mut Self, width| file.width = width)
            .scalar("ephemeral", |file: &mut Self, ephemeral| file.ephemeral = ephemeral)
            .build()
    }
}

/// Channel mentioned in a crossposted message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelMention {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub channel_type: Option<ChannelType>,
    pub name: String,
}

impl Mappable for ChannelMention {
    const TYPE_NAME: &'static str = "ChannelMention";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |mention: &mut Self, id| mention.id = id)
            .scalar("guild_id", |mention: &mut Self, id| mention.guild_id = id)
            .enumeration("type", |mention: &mut Self, kind| mention.channel_type = kind)
            .scalar("name", |mention: &mut Self, name| mention.name = name)
            .build()
    }
}

/// Reaction count for one emoji on a message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reaction {
    pub count: u32,
    pub me: bool,
    pub emoji: Option<Emoji>,
}

impl Mappable for Reaction {
    const TYPE_NAME: &'static str = "Reaction";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("count", |reaction: &mut Self, count| reaction.count = count)
            .scalar("me", |reaction: &mut Self, me| reaction.me = me)
            .object("emoji", |reaction: &mut Self, emoji| reaction.emoji = emoji)
            .build()
    }
}
