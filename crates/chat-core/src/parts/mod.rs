//! Parts - typed payload objects built by the mapper

mod application_command;
mod auto_moderation;
mod channel;
mod embed;
mod emoji;
mod interaction;
mod message;
mod user;
mod widget;

pub use application_command::{
    ApplicationCommand, ApplicationCommandPermissions, ApplicationCommandPermissionsObject,
};
pub use auto_moderation::{
    AutoModerationAction, AutoModerationActionMetadata, AutoModerationRule,
    AutoModerationTriggerMetadata,
};
pub use channel::{Channel, ThreadMember};
pub use embed::{Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage};
pub use emoji::Emoji;
pub use interaction::InteractionData;
pub use message::{
    Attachment, ChannelMention, Message, MessageActivity, MessageReference, Reaction,
};
pub use user::User;
pub use widget::Widget;
