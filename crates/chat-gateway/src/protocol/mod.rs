//! Gateway protocol definitions
//!
//! Op codes and the payload envelope.

mod opcodes;
mod payload;

pub use opcodes::{OpCode, UnknownOpCode};
pub use payload::GatewayPayload;
