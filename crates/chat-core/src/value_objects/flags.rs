//! Bitwise flag fields
//!
//! Flags arrive either as an integer or, for the wider permission sets, as a
//! decimal string. Both types are built through the single-argument
//! constructor path, so a bare scalar on the wire maps straight onto them.

use bitflags::bitflags;
use chat_mapper::{constructor_args, ConstructError, Mappable, TypeDescriptor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

bitflags! {
    /// Message flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MessageFlags: u64 {
        /// Published to following channels
        const CROSSPOSTED                            = 1 << 0;
        /// Originated from a followed channel
        const IS_CROSSPOST                           = 1 << 1;
        const SUPPRESS_EMBEDS                        = 1 << 2;
        const SOURCE_MESSAGE_DELETED                 = 1 << 3;
        const URGENT                                 = 1 << 4;
        const HAS_THREAD                             = 1 << 5;
        /// Only visible to the invoking user
        const EPHEMERAL                              = 1 << 6;
        const LOADING                                = 1 << 7;
        const FAILED_TO_MENTION_SOME_ROLES_IN_THREAD = 1 << 8;
        const SUPPRESS_NOTIFICATIONS                 = 1 << 12;
    }
}

bitflags! {
    /// Channel and role permission flags
    ///
    /// Serialized as a string in JSON for JavaScript safety.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u64 {
        const CREATE_INSTANT_INVITE = 1 << 0;
        const KICK_MEMBERS          = 1 << 1;
        const BAN_MEMBERS           = 1 << 2;
        /// Bypass all permission checks
        const ADMINISTRATOR         = 1 << 3;
        const MANAGE_CHANNELS       = 1 << 4;
        const MANAGE_GUILD          = 1 << 5;
        const ADD_REACTIONS         = 1 << 6;
        const VIEW_AUDIT_LOG        = 1 << 7;
        const VIEW_CHANNEL          = 1 << 10;
        const SEND_MESSAGES         = 1 << 11;
        const MANAGE_MESSAGES       = 1 << 13;
        const ATTACH_FILES          = 1 << 15;
        const MENTION_EVERYONE      = 1 << 17;
        const MANAGE_ROLES          = 1 << 28;
        const USE_APPLICATION_COMMANDS = 1 << 31;
        const MANAGE_THREADS        = 1 << 34;
        const MODERATE_MEMBERS      = 1 << 40;
    }
}

impl Permissions {
    /// Check if the permission set contains a required permission
    ///
    /// Administrators bypass all permission checks.
    #[inline]
    pub fn has(&self, permission: Permissions) -> bool {
        if self.contains(Permissions::ADMINISTRATOR) {
            return true;
        }
        self.contains(permission)
    }

    /// Combine permissions from multiple overwrites or roles
    pub fn combine<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = Permissions>,
    {
        sets.into_iter().fold(Permissions::empty(), |acc, p| acc | p)
    }
}

impl MessageFlags {
    #[inline]
    pub fn is_ephemeral(&self) -> bool {
        self.contains(MessageFlags::EPHEMERAL)
    }
}

/// Read flag bits from an integer or a decimal string
fn parse_bits(type_name: &'static str, raw: &Value) -> Result<u64, ConstructError> {
    match constructor_args(raw) {
        [Value::Number(bits)] => bits
            .as_u64()
            .ok_or_else(|| ConstructError::invalid(type_name, "flags must be a non-negative integer")),
        [Value::String(bits)] => bits
            .parse::<u64>()
            .map_err(|err| ConstructError::invalid(type_name, err)),
        [other] => Err(ConstructError::not_constructible(type_name, other)),
        args => Err(ConstructError::ArgumentCount {
            type_name,
            expected: 1,
            given: args.len(),
        }),
    }
}

macro_rules! flags_value_object {
    ($name:ident) => {
        impl Default for $name {
            fn default() -> Self {
                $name::empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.bits())
            }
        }

        // Unknown bits are dropped, so newer platform flags never fail a mapping
        impl Mappable for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn describe() -> TypeDescriptor<Self> {
                TypeDescriptor::empty()
            }

            fn construct(raw: &Value) -> Result<Self, ConstructError> {
                parse_bits(Self::TYPE_NAME, raw).map($name::from_bits_truncate)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.bits().to_string())
            }
        }

        // Deserialize from string or number
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = Value::deserialize(deserializer)?;
                parse_bits(Self::TYPE_NAME, &raw)
                    .map($name::from_bits_truncate)
                    .map_err(serde::de::Error::custom)
            }
        }

        impl From<u64> for $name {
            fn from(bits: u64) -> Self {
                $name::from_bits_truncate(bits)
            }
        }
    };
}

flags_value_object!(MessageFlags);
flags_value_object!(Permissions);
