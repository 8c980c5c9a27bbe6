//! Test fixtures and data generators
//!
//! Builds raw payloads the way the platform sends them.

use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Unique snowflake id, as the string the wire carries
pub fn unique_id() -> String {
    ((1_000_000_000_000_u64 << 22) + unique_suffix()).to_string()
}

/// User object
pub fn user_payload() -> Value {
    let suffix = unique_suffix();
    json!({
        "id": unique_id(),
        "username": format!("testuser{suffix}"),
        "discriminator": "0",
        "global_name": format!("Test User {suffix}"),
        "avatar": null,
        "bot": false
    })
}

/// Embed field object
pub fn embed_field(name: &str, value: &str) -> Value {
    json!({"name": name, "value": value, "inline": true})
}

/// Rich embed with the given fields value (a list or a keyed mapping)
pub fn embed_payload(fields: Value) -> Value {
    json!({
        "title": "Release notes",
        "type": "rich",
        "description": "What changed this week",
        "timestamp": "2021-01-01T00:00:00+00:00",
        "color": 5_793_266,
        "footer": {"text": "changelog"},
        "fields": fields
    })
}

/// Message object as returned by the REST API and carried by MESSAGE_CREATE
pub fn message_payload(channel_id: &str) -> Value {
    json!({
        "id": unique_id(),
        "channel_id": channel_id,
        "author": user_payload(),
        "content": "Supa Hot",
        "timestamp": "2017-07-11T17:27:07.299000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [embed_payload(json!([embed_field("Added", "typed events")]))],
        "reactions": [{"count": 1, "me": false, "emoji": {"id": null, "name": "🔥"}}],
        "pinned": false,
        "type": 0,
        "flags": 0
    })
}

/// Dispatch frame text
pub fn dispatch_frame(event: &str, sequence: u64, data: &Value) -> String {
    json!({"op": 0, "t": event, "s": sequence, "d": data}).to_string()
}
