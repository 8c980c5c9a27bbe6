//! Value objects - immutable types that represent domain concepts

mod flags;
mod snowflake;
mod timestamp;

pub use flags::{MessageFlags, Permissions};
pub use snowflake::{Snowflake, SnowflakeParseError};
pub use timestamp::Timestamp;
