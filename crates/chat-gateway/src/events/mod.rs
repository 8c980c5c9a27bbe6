//! Gateway events
//!
//! Event names and the typed data of dispatch events.

mod event_types;
mod payloads;

pub use event_types::GatewayEventType;
pub use payloads::{
    ChannelPinsUpdateEvent, GatewayEvent, GuildIntegrationsUpdateEvent, GuildRoleDeleteEvent,
    ReadyEvent, ThreadDeleteEvent, ThreadMembersUpdateEvent, UnavailableGuild,
};
