//! Backed enums
//!
//! Every enum here is looked up from its wire value with try-from semantics:
//! a value with no matching member maps to `None`, while a value of the wrong
//! backing type (a string for an integer-backed enum) is a lookup fault.

macro_rules! int_backed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            /// Member for a wire value, if any
            #[must_use]
            pub fn from_value(value: i64) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Wire value of this member
            #[must_use]
            pub fn value(self) -> i64 {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl chat_mapper::MappableEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn try_from_value(
                raw: &serde_json::Value,
            ) -> Result<Option<Self>, chat_mapper::EnumLookupError> {
                Ok(chat_mapper::int_backing::<Self>(raw)?.and_then(Self::from_value))
            }
        }
    };
}

macro_rules! string_backed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            /// Member for a wire value, if any
            #[must_use]
            pub fn from_value(value: &str) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl chat_mapper::MappableEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn try_from_value(
                raw: &serde_json::Value,
            ) -> Result<Option<Self>, chat_mapper::EnumLookupError> {
                Ok(chat_mapper::string_backing::<Self>(raw)?.and_then(Self::from_value))
            }
        }
    };
}

mod application_command;
mod auto_moderation;
mod channel;
mod message;

pub use application_command::{ApplicationCommandPermissionType, ApplicationCommandType};
pub use auto_moderation::{
    AutoModerationActionType, AutoModerationEventType, AutoModerationKeywordPresetType,
    AutoModerationTriggerType,
};
pub use channel::{ChannelType, NsfwLevel};
pub use message::{EmbedType, MessageActivityType, MessageType};
