//! Gateway Integration Tests
//!
//! Text frames decoded, mapped and delivered through the event dispatcher.
//!
//! Run with: cargo test -p integration-tests --test gateway_tests

use std::sync::Arc;

use chat_common::{AppError, ClientConfig};
use chat_core::{Channel, ChannelType, Message, Snowflake};
use chat_gateway::{
    ChannelPinsUpdateEvent, DispatchOutcome, EventDispatcher, GatewayError, GatewayEventType,
    GatewayPayload, GuildIntegrationsUpdateEvent, OpCode, ThreadDeleteEvent,
    ThreadMembersUpdateEvent,
};
use integration_tests::{dispatch_frame, message_payload, quiet_mapper, unique_id};
use parking_lot::Mutex;
use serde_json::json;

fn dispatcher() -> EventDispatcher {
    EventDispatcher::new(quiet_mapper())
}

#[test]
fn test_message_create_reaches_listener() {
    let dispatcher = dispatcher();
    let received = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&received);
    dispatcher.on::<Message, _>(move |message| sink.lock().push(message.clone()));

    let channel_id = unique_id();
    let frame = dispatch_frame("MESSAGE_CREATE", 1, &message_payload(&channel_id));
    let outcome = dispatcher.dispatch_json(&frame).unwrap();

    assert_eq!(
        outcome,
        DispatchOutcome::Delivered {
            event: GatewayEventType::MessageCreate,
            listeners: 1
        }
    );
    let received = received.lock();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].channel_id.to_string(), channel_id);
    assert_eq!(received[0].content, "Supa Hot");
}

#[test]
fn test_message_update_uses_event_registration() {
    let dispatcher = dispatcher();
    let edits = Arc::new(Mutex::new(0));

    let counter = Arc::clone(&edits);
    dispatcher.on_event::<Message, _>(GatewayEventType::MessageUpdate, move |message| {
        if message.is_edited() {
            *counter.lock() += 1;
        }
    });

    let mut payload = message_payload(&unique_id());
    payload["edited_timestamp"] = json!("2017-07-11T17:30:00+00:00");

    dispatcher
        .dispatch_json(&dispatch_frame("MESSAGE_UPDATE", 2, &payload))
        .unwrap();
    // Registered for updates only
    dispatcher
        .dispatch_json(&dispatch_frame("MESSAGE_CREATE", 3, &payload))
        .unwrap();

    assert_eq!(*edits.lock(), 1);
}

#[test]
fn test_thread_events() {
    let dispatcher = dispatcher();
    let deleted = Arc::new(Mutex::new(None));
    let members = Arc::new(Mutex::new(None));
    let created = Arc::new(Mutex::new(None));

    let sink = Arc::clone(&deleted);
    dispatcher.on::<ThreadDeleteEvent, _>(move |event| *sink.lock() = Some(event.clone()));
    let sink = Arc::clone(&members);
    dispatcher.on::<ThreadMembersUpdateEvent, _>(move |event| *sink.lock() = Some(event.clone()));
    let sink = Arc::clone(&created);
    dispatcher.on_event::<Channel, _>(GatewayEventType::ThreadCreate, move |channel| {
        *sink.lock() = Some(channel.clone());
    });

    let frames = [
        dispatch_frame(
            "THREAD_CREATE",
            10,
            &json!({"id": "1000", "guild_id": "2000", "parent_id": "3000", "type": 11, "name": "help"}),
        ),
        dispatch_frame(
            "THREAD_MEMBERS_UPDATE",
            11,
            &json!({
                "id": "1000",
                "guild_id": "2000",
                "member_count": 2,
                "added_members": [{"id": "1000", "user_id": "4000", "flags": 1}],
                "removed_member_ids": ["5000"]
            }),
        ),
        dispatch_frame(
            "THREAD_DELETE",
            12,
            &json!({"id": "1000", "guild_id": "2000", "parent_id": "3000", "type": 11}),
        ),
    ];
    for frame in &frames {
        dispatcher.dispatch_json(frame).unwrap();
    }

    let created = created.lock().clone().unwrap();
    assert!(created.is_thread());
    assert_eq!(created.name.as_deref(), Some("help"));

    let members = members.lock().clone().unwrap();
    assert!(members.added(Snowflake::new(4000)));
    assert!(members.removed(Snowflake::new(5000)));

    let deleted = deleted.lock().clone().unwrap();
    assert_eq!(deleted.channel_type, Some(ChannelType::PublicThread));
    assert_eq!(deleted.parent_id, Some(Snowflake::new(3000)));

    assert_eq!(dispatcher.last_sequence(), Some(12));
}

#[test]
fn test_partial_event_data_is_still_delivered() {
    let dispatcher = dispatcher();
    let pins = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&pins);
    dispatcher.on::<ChannelPinsUpdateEvent, _>(move |event| sink.lock().push(event.clone()));

    // Unknown key and a bad timestamp; the rest still comes through
    let frame = dispatch_frame(
        "CHANNEL_PINS_UPDATE",
        1,
        &json!({
            "channel_id": "41771983423143938",
            "last_pin_timestamp": "yesterday",
            "pinned_by": "80351110224678912"
        }),
    );
    dispatcher.dispatch_json(&frame).unwrap();

    let pins = pins.lock();
    assert_eq!(pins.len(), 1);
    assert_eq!(pins[0].channel_id, Snowflake::new(41_771_983_423_143_938));
    assert_eq!(pins[0].last_pin_timestamp, None);
}

#[test]
fn test_unknown_events_are_ignored() {
    let dispatcher = dispatcher();
    dispatcher.on::<GuildIntegrationsUpdateEvent, _>(|_| panic!("wrong event"));

    let outcome = dispatcher
        .dispatch_json(&dispatch_frame("VOICE_CHANNEL_EFFECT_SEND", 7, &json!({})))
        .unwrap();

    assert_eq!(outcome, DispatchOutcome::Unknown("VOICE_CHANNEL_EFFECT_SEND".to_string()));
    assert_eq!(dispatcher.last_sequence(), Some(7));
}

#[test]
fn test_session_lifecycle() {
    let dispatcher = dispatcher();

    let hello = dispatcher
        .dispatch_json(r#"{"op": 10, "d": {"heartbeat_interval": 41250}}"#)
        .unwrap();
    assert_eq!(hello, DispatchOutcome::Control(OpCode::Hello));
    assert_eq!(dispatcher.heartbeat().to_json().unwrap(), r#"{"op":1,"d":null}"#);

    dispatcher
        .dispatch_json(&dispatch_frame("GUILD_INTEGRATIONS_UPDATE", 5, &json!({"guild_id": "1"})))
        .unwrap();
    assert_eq!(dispatcher.heartbeat().to_json().unwrap(), r#"{"op":1,"d":5}"#);

    // A resumable invalid session keeps the sequence for the Resume payload
    let payload = GatewayPayload::from_json(r#"{"op": 9, "d": true}"#).unwrap();
    assert!(payload.is_recoverable_invalid_session());
    dispatcher.dispatch(&payload).unwrap();
    let resume = GatewayPayload::resume("token", "session", dispatcher.last_sequence().unwrap());
    assert_eq!(resume.d.unwrap()["seq"], json!(5));

    let payload = GatewayPayload::from_json(r#"{"op": 9, "d": false}"#).unwrap();
    assert!(!payload.is_recoverable_invalid_session());
    dispatcher.dispatch(&payload).unwrap();
    assert_eq!(dispatcher.last_sequence(), None);
}

#[test]
fn test_dispatcher_from_client_config() {
    let config = ClientConfig::from_lookup(|key| match key {
        "MAPPER_MAX_DEPTH" => Some("2".to_string()),
        "MAPPER_LOG_ERRORS" => Some("false".to_string()),
        _ => None,
    })
    .unwrap();
    let dispatcher = EventDispatcher::new(config.data_mapper());
    assert_eq!(dispatcher.mapper().mapper().config().max_depth, 2);

    let replies = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&replies);
    dispatcher.on::<Message, _>(move |message| {
        let embed_field = |message: &Message| {
            message
                .embeds
                .get(0)
                .is_some_and(|embed| embed.fields.get(0).is_some())
        };
        let referenced = message.referenced_message.as_deref().map(embed_field);
        sink.lock().push((embed_field(message), referenced));
    });

    // Embed fields of the referenced message sit one level past the limit
    let mut reply = message_payload(&unique_id());
    reply["type"] = json!(19);
    reply["referenced_message"] = message_payload(&unique_id());
    dispatcher
        .dispatch_json(&dispatch_frame("MESSAGE_CREATE", 1, &reply))
        .unwrap();

    assert_eq!(*replies.lock(), vec![(true, Some(false))]);
}

#[test]
fn test_gateway_errors_convert_to_app_errors() {
    let dispatcher = dispatcher();

    let err: AppError = dispatcher.dispatch_json(r#"{"op": 0, "s": 1}"#).unwrap_err().into();
    assert_eq!(err.error_code(), "GATEWAY_ERROR");
    assert_eq!(err.to_string(), "Gateway error: Dispatch payload has no event name");

    assert!(matches!(
        dispatcher.dispatch_json(r#"{"op": 42}"#),
        Err(GatewayError::Decode(_))
    ));
}
