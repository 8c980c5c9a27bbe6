//! # chat-core
//!
//! Domain layer: value objects, backed enums, and the parts the mapper builds
//! from REST responses and gateway events.
//! Every part registers its wire fields through `chat_mapper::Mappable`.

pub mod enums;
pub mod parts;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use enums::{
    ApplicationCommandPermissionType, ApplicationCommandType, AutoModerationActionType,
    AutoModerationEventType, AutoModerationKeywordPresetType, AutoModerationTriggerType,
    ChannelType, EmbedType, MessageActivityType, MessageType, NsfwLevel,
};
pub use parts::{
    ApplicationCommand, ApplicationCommandPermissions, ApplicationCommandPermissionsObject,
    Attachment, AutoModerationAction, AutoModerationActionMetadata, AutoModerationRule,
    AutoModerationTriggerMetadata, Channel, ChannelMention, Embed, EmbedAuthor, EmbedField,
    EmbedFooter, EmbedImage, Emoji, InteractionData, Message, MessageActivity, MessageReference,
    Reaction, ThreadMember, User, Widget,
};
pub use value_objects::{MessageFlags, Permissions, Snowflake, SnowflakeParseError, Timestamp};
