//! ISO-8601 timestamps as sent by the platform

use chat_mapper::{constructor_args, ConstructError, Mappable, TypeDescriptor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Point in time carried by a payload (`timestamp`, `edited_timestamp`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    #[inline]
    pub const fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    #[inline]
    pub const fn into_inner(self) -> DateTime<Utc> {
        self.0
    }

    /// Parse an RFC 3339 string, normalising the offset to UTC
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s).map(|at| Self(at.with_timezone(&Utc)))
    }

    /// Milliseconds since the Unix epoch
    #[inline]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Mappable for Timestamp {
    const TYPE_NAME: &'static str = "Timestamp";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::empty()
    }

    fn construct(raw: &Value) -> Result<Self, ConstructError> {
        match constructor_args(raw) {
            [Value::String(text)] => {
                Self::parse(text).map_err(|err| ConstructError::invalid(Self::TYPE_NAME, err))
            }
            [other] => Err(ConstructError::not_constructible(Self::TYPE_NAME, other)),
            args => Err(ConstructError::ArgumentCount {
                type_name: Self::TYPE_NAME,
                expected: 1,
                given: args.len(),
            }),
        }
    }
}
