//! Auto moderation parts

use chat_mapper::{Mappable, MappedArray, TypeDescriptor};

use crate::enums::{
    AutoModerationActionType, AutoModerationEventType, AutoModerationKeywordPresetType,
    AutoModerationTriggerType,
};
use crate::value_objects::Snowflake;

/// Auto moderation rule of a guild
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoModerationRule {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    pub creator_id: Snowflake,
    pub event_type: Option<AutoModerationEventType>,
    pub trigger_type: Option<AutoModerationTriggerType>,
    pub trigger_metadata: Option<AutoModerationTriggerMetadata>,
    pub actions: MappedArray<AutoModerationAction>,
    pub enabled: bool,
    pub exempt_roles: Vec<Snowflake>,
    pub exempt_channels: Vec<Snowflake>,
}

impl AutoModerationRule {
    /// Whether a member with `roles`, posting in `channel_id`, is out of scope
    pub fn is_exempt(&self, channel_id: Snowflake, roles: &[Snowflake]) -> bool {
        self.exempt_channels.contains(&channel_id)
            || roles.iter().any(|role| self.exempt_roles.contains(role))
    }
}

impl Mappable for AutoModerationRule {
    const TYPE_NAME: &'static str = "AutoModerationRule";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |rule: &mut Self, id| rule.id = id)
            .scalar("guild_id", |rule: &mut Self, id| rule.guild_id = id)
            .scalar("name", |rule: &mut Self, name| rule.name = name)
            .scalar("creator_id", |rule: &mut Self, id| rule.creator_id = id)
            .enumeration("event_type", |rule: &mut Self, kind| rule.event_type = kind)
            .enumeration("trigger_type", |rule: &mut Self, kind| rule.trigger_type = kind)
            .object("trigger_metadata", |rule: &mut Self, metadata| {
                rule.trigger_metadata = metadata;
            })
            .object_array("actions", |rule: &mut Self, actions| rule.actions = actions)
            .scalar("enabled", |rule: &mut Self, enabled| rule.enabled = enabled)
            .array("exempt_roles", |rule: &mut Self, roles| rule.exempt_roles = roles)
            .array("exempt_channels", |rule: &mut Self, channels| rule.exempt_channels = channels)
            .build()
    }
}

/// Extra data used to decide whether a rule triggers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoModerationTriggerMetadata {
    pub keyword_filter: Vec<String>,
    pub regex_patterns: Vec<String>,
    pub presets: MappedArray<AutoModerationKeywordPresetType>,
    pub allow_list: Vec<String>,
    pub mention_total_limit: Option<u32>,
    pub mention_raid_protection_enabled: Option<bool>,
}

impl Mappable for AutoModerationTriggerMetadata {
    const TYPE_NAME: &'static str = "AutoModerationTriggerMetadata";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .array("keyword_filter", |metadata: &mut Self, keywords| {
                metadata.keyword_filter = keywords;
            })
            .array("regex_patterns", |metadata: &mut Self, patterns| {
                metadata.regex_patterns = patterns;
            })
            .enum_array("presets", |metadata: &mut Self, presets| metadata.presets = presets)
            .array("allow_list", |metadata: &mut Self, allowed| metadata.allow_list = allowed)
            .scalar("mention_total_limit", |metadata: &mut Self, limit| {
                metadata.mention_total_limit = limit;
            })
            .scalar("mention_raid_protection_enabled", |metadata: &mut Self, enabled| {
                metadata.mention_raid_protection_enabled = enabled;
            })
            .build()
    }
}

/// What happens when a rule triggers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoModerationAction {
    pub action_type: Option<AutoModerationActionType>,
    pub metadata: Option<AutoModerationActionMetadata>,
}

impl Mappable for AutoModerationAction {
    const TYPE_NAME: &'static str = "AutoModerationAction";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .enumeration("type", |action: &mut Self, kind| action.action_type = kind)
            .object("metadata", |action: &mut Self, metadata| action.metadata = metadata)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoModerationActionMetadata {
    /// Alert channel for `SendAlertMessage`
    pub channel_id: Option<Snowflake>,
    /// Timeout length for `Timeout`
    pub duration_seconds: Option<u32>,
    pub custom_message: Option<String>,
}

impl Mappable for AutoModerationActionMetadata {
    const TYPE_NAME: &'static str = "AutoModerationActionMetadata";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("channel_id", |metadata: &mut Self, id| metadata.channel_id = id)
            .scalar("duration_seconds", |metadata: &mut Self, seconds| {
                metadata.duration_seconds = seconds;
            })
            .scalar("custom_message", |metadata: &mut Self, text| metadata.custom_message = text)
            .build()
    }
}
