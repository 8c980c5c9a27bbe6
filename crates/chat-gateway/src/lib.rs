//! # chat-gateway
//!
//! Gateway side of the client: the payload envelope, op codes, event names,
//! and a dispatcher that turns dispatch payloads into typed events.

pub mod dispatch;
pub mod events;
pub mod protocol;

pub use dispatch::{DispatchOutcome, EventDispatcher, GatewayError, GatewayResult};
pub use events::{
    ChannelPinsUpdateEvent, GatewayEvent, GatewayEventType, GuildIntegrationsUpdateEvent,
    GuildRoleDeleteEvent, ReadyEvent, ThreadDeleteEvent, ThreadMembersUpdateEvent,
    UnavailableGuild,
};
pub use protocol::{GatewayPayload, OpCode, UnknownOpCode};
