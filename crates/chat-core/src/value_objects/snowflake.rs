//! Snowflake ids
//!
//! The top 42 bits hold milliseconds since [`Snowflake::EPOCH`]; the low 22
//! bits are worker, process and increment counters nobody outside the
//! platform reads.

use chat_mapper::{constructor_args, ConstructError, Mappable, TypeDescriptor};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

const TIMESTAMP_SHIFT: u32 = 22;

/// 64-bit platform id
///
/// Arrives as a decimal string on the wire; integers are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(u64);

impl Snowflake {
    /// 2015-01-01T00:00:00Z in Unix milliseconds
    pub const EPOCH: u64 = 1_420_070_400_000;

    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> u64 {
        self.0
    }

    /// Smallest id that could have been created at `unix_millis`
    ///
    /// Used as a `before`/`after` bound when paging by time.
    #[must_use]
    pub const fn from_unix_millis(unix_millis: u64) -> Self {
        Self(unix_millis.saturating_sub(Self::EPOCH) << TIMESTAMP_SHIFT)
    }

    /// Creation time in Unix milliseconds
    #[must_use]
    pub const fn unix_millis(self) -> u64 {
        (self.0 >> TIMESTAMP_SHIFT) + Self::EPOCH
    }

    #[must_use]
    pub fn created_at(self) -> DateTime<Utc> {
        i64::try_from(self.unix_millis())
            .ok()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid snowflake: {0:?}")]
pub struct SnowflakeParseError(String);

impl FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| SnowflakeParseError(s.to_string()))
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for Snowflake {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for u64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

// Built from the raw id through the single-argument constructor path
impl Mappable for Snowflake {
    const TYPE_NAME: &'static str = "Snowflake";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::empty()
    }

    fn construct(raw: &Value) -> Result<Self, ConstructError> {
        match constructor_args(raw) {
            [Value::String(id)] => {
                id.parse().map_err(|err| ConstructError::invalid(Self::TYPE_NAME, err))
            }
            [Value::Number(id)] => id
                .as_u64()
                .map(Self)
                .ok_or_else(|| ConstructError::invalid(Self::TYPE_NAME, "negative or fractional id")),
            [other] => Err(ConstructError::not_constructible(Self::TYPE_NAME, other)),
            args => Err(ConstructError::ArgumentCount {
                type_name: Self::TYPE_NAME,
                expected: 1,
                given: args.len(),
            }),
        }
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Number(u64),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Text(text) => text.parse().map_err(serde::de::Error::custom),
            Wire::Number(id) => Ok(Self(id)),
        }
    }
}
