//! Gateway payload envelope
//!
//! Every message on the gateway connection is one of these.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::OpCode;
use crate::events::GatewayEventType;

/// Gateway payload format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayPayload {
    /// Operation code
    pub op: OpCode,

    /// Event name (only for op=0 Dispatch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,

    /// Sequence number (only for op=0 Dispatch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<u64>,

    /// Event data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<Value>,
}

impl GatewayPayload {
    /// Decode a payload from a text frame
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Encode the payload for a text frame
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Create a Dispatch payload (op=0)
    #[must_use]
    pub fn dispatch(event_type: impl Into<String>, sequence: u64, data: Value) -> Self {
        Self {
            op: OpCode::Dispatch,
            t: Some(event_type.into()),
            s: Some(sequence),
            d: Some(data),
        }
    }

    /// Create a Heartbeat payload (op=1) carrying the last sequence seen
    #[must_use]
    pub fn heartbeat(last_sequence: Option<u64>) -> Self {
        Self {
            op: OpCode::Heartbeat,
            t: None,
            s: None,
            d: Some(last_sequence.map_or(Value::Null, Value::from)),
        }
    }

    /// Create a Resume payload (op=6)
    #[must_use]
    pub fn resume(token: &str, session_id: &str, sequence: u64) -> Self {
        Self {
            op: OpCode::Resume,
            t: None,
            s: None,
            d: Some(json!({
                "token": token,
                "session_id": session_id,
                "seq": sequence,
            })),
        }
    }

    #[must_use]
    pub fn is_dispatch(&self) -> bool {
        self.op == OpCode::Dispatch
    }

    /// Known event type of a dispatch payload
    #[must_use]
    pub fn event_type(&self) -> Option<GatewayEventType> {
        self.t.as_deref().and_then(GatewayEventType::from_str)
    }

    /// Heartbeat interval in milliseconds announced by a Hello payload
    #[must_use]
    pub fn heartbeat_interval(&self) -> Option<u64> {
        if self.op != OpCode::Hello {
            return None;
        }
        self.d.as_ref()?.get("heartbeat_interval")?.as_u64()
    }

    /// Whether an Invalid Session payload allows resuming
    ///
    /// The session can be resumed only when `d` is exactly `true`.
    #[must_use]
    pub fn is_recoverable_invalid_session(&self) -> bool {
        self.op == OpCode::InvalidSession && self.d == Some(Value::Bool(true))
    }
}
