//! Mapping Integration Tests
//!
//! Realistic payloads mapped end-to-end through the domain parts.
//!
//! Run with: cargo test -p integration-tests --test mapping_tests

use chat_core::{
    AutoModerationAction, AutoModerationRule, Embed, Emoji, Message, MessageFlags, MessageType,
    Snowflake, User, Widget,
};
use chat_mapper::{
    constructor_args, ArrayKey, ConstructError, Mappable, Mapper, MappingErrorKind,
    TypeDescriptor,
};
use integration_tests::{
    assert_clean, embed_field, embed_payload, error_fields, error_kinds, init_test_tracing,
    message_payload, qualifying_mapper, quiet_mapper, unique_id, user_payload,
};
use serde_json::{json, Value};

/// Plain two-string record
#[derive(Debug, Default, PartialEq)]
struct Label {
    id: String,
    name: String,
}

impl Mappable for Label {
    const TYPE_NAME: &'static str = "Label";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |label: &mut Self, id| label.id = id)
            .scalar("name", |label: &mut Self, name| label.name = name)
            .build()
    }
}

/// Built from a single string argument
#[derive(Debug, Default, PartialEq)]
struct Nickname(String);

impl Mappable for Nickname {
    const TYPE_NAME: &'static str = "Nickname";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::empty()
    }

    fn construct(raw: &Value) -> Result<Self, ConstructError> {
        match constructor_args(raw) {
            [Value::String(name)] => Ok(Self(name.clone())),
            [other] => Err(ConstructError::not_constructible(Self::TYPE_NAME, other)),
            args => Err(ConstructError::ArgumentCount {
                type_name: Self::TYPE_NAME,
                expected: 1,
                given: args.len(),
            }),
        }
    }
}

/// Rejects every non-keyed value
#[derive(Debug, Default)]
struct Strict;

impl Mappable for Strict {
    const TYPE_NAME: &'static str = "Strict";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::empty()
    }

    fn construct(raw: &Value) -> Result<Self, ConstructError> {
        Err(ConstructError::invalid(
            Self::TYPE_NAME,
            format!("refusing {raw}"),
        ))
    }
}

// ============================================================================
// Simple payloads
// ============================================================================

#[test]
fn test_two_string_record() {
    let label = assert_clean(Mapper::default().map::<Label>(&json!({"id": "42", "name": "x"})));
    assert_eq!(
        label,
        Label {
            id: "42".to_string(),
            name: "x".to_string()
        }
    );
}

#[test]
fn test_valid_user_maps_every_field() {
    let payload = user_payload();
    let user = assert_clean(quiet_mapper().map_completed::<User>(&payload));

    assert_eq!(user.id.to_string(), payload["id"].as_str().unwrap());
    assert_eq!(user.username, payload["username"].as_str().unwrap());
    assert_eq!(user.global_name.as_deref(), payload["global_name"].as_str());
    assert_eq!(user.avatar, None);
    assert_eq!(user.bot, Some(false));
    assert_eq!(user.tag(), user.username);
}

#[test]
fn test_unknown_key_is_one_error() {
    let mut payload = user_payload();
    payload["pronouns"] = json!("they/them");

    let mapping = quiet_mapper().map_completed::<User>(&payload);
    assert_eq!(error_kinds(&mapping.errors), vec![MappingErrorKind::UnknownField]);
    assert_eq!(error_fields(&mapping.errors), vec!["pronouns"]);
    assert_eq!(mapping.errors[0].target_type(), "User");

    let user = mapping.result.unwrap();
    assert_eq!(user.username, payload["username"].as_str().unwrap());
    assert_eq!(user.bot, Some(false));
}

// ============================================================================
// Enums
// ============================================================================

#[test]
fn test_unmatched_enum_value_is_not_an_error() {
    let action = assert_clean(Mapper::default().map::<AutoModerationAction>(&json!({"type": 99})));
    assert_eq!(action.action_type, None);
}

#[test]
fn test_enum_lookup_fault_is_recorded() {
    let mapping = Mapper::default().map::<AutoModerationAction>(&json!({"type": "block"}));

    assert_eq!(error_kinds(&mapping.errors), vec![MappingErrorKind::EnumLookupFailure]);
    assert!(mapping.errors[0].cause().is_some());
    assert_eq!(mapping.result.unwrap().action_type, None);
}

// ============================================================================
// Non-keyed payloads
// ============================================================================

#[test]
fn test_single_argument_construction() {
    let nickname = assert_clean(Mapper::default().map::<Nickname>(&json!("abc")));
    assert_eq!(nickname, Nickname("abc".to_string()));

    // A sequence is the whole argument list
    let nickname = assert_clean(Mapper::default().map::<Nickname>(&json!(["abc"])));
    assert_eq!(nickname.0, "abc");
}

#[test]
fn test_failing_constructor() {
    let mapping = Mapper::default().map::<Strict>(&json!("abc"));

    assert!(mapping.result.is_none());
    assert_eq!(error_kinds(&mapping.errors), vec![MappingErrorKind::InstantiationFailure]);
    assert_eq!(
        mapping.errors[0].cause().map(ToString::to_string),
        Some("Strict: refusing \"abc\"".to_string())
    );
}

#[test]
fn test_snowflake_from_scalars() {
    let mapper = Mapper::default();
    assert_eq!(
        assert_clean(mapper.map::<Snowflake>(&json!("175928847299117063"))),
        Snowflake::new(175_928_847_299_117_063)
    );
    assert_eq!(assert_clean(mapper.map::<Snowflake>(&json!(42))), Snowflake::new(42));

    let mapping = mapper.map::<Snowflake>(&json!("abc"));
    assert!(mapping.result.is_none());
    assert_eq!(error_kinds(&mapping.errors), vec![MappingErrorKind::InstantiationFailure]);
}

#[test]
fn test_parts_refuse_scalars() {
    let mapping = Mapper::default().map::<Message>(&json!("hello"));
    assert!(mapping.result.is_none());
    assert_eq!(error_kinds(&mapping.errors), vec![MappingErrorKind::InstantiationFailure]);
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn test_array_elements_map_independently() {
    let payload = embed_payload(json!([
        embed_field("Added", "typed events"),
        {"name": "Fixed", "value": "depth guard", "colour": "red"},
        embed_field("Removed", "nothing"),
        {"name": 7, "value": "numbers are not names"}
    ]));

    let mapping = quiet_mapper().map_completed::<Embed>(&payload);
    let embed = mapping.result.unwrap();

    assert_eq!(embed.fields.len(), 4);
    assert_eq!(embed.fields.get(0).map(|field| field.name.as_str()), Some("Added"));
    assert_eq!(embed.fields.get(1).map(|field| field.value.as_str()), Some("depth guard"));
    assert_eq!(embed.fields.get(2).map(|field| field.name.as_str()), Some("Removed"));
    assert_eq!(embed.fields.get(3).map(|field| field.name.as_str()), Some(""));

    // One flat list, in element order, unqualified by default
    assert_eq!(
        error_kinds(&mapping.errors),
        vec![MappingErrorKind::UnknownField, MappingErrorKind::AssignmentFailure]
    );
    assert_eq!(error_fields(&mapping.errors), vec!["colour", "name"]);
}

#[test]
fn test_keyed_array_with_one_invalid_entry() {
    let payload = embed_payload(json!({
        "0": embed_field("Added", "typed events"),
        "1": {"name": "Broken", "value": ["not", "text"]}
    }));

    let mapping = quiet_mapper().map_completed::<Embed>(&payload);
    let embed = mapping.result.unwrap();

    let keys: Vec<_> = embed.fields.keys().cloned().collect();
    assert_eq!(keys, vec![ArrayKey::Index(0), ArrayKey::Index(1)]);
    assert_eq!(embed.fields.get(0).map(|field| field.value.as_str()), Some("typed events"));

    // Index 1 is partially populated; only its failure is reported
    let broken = embed.fields.get(1).unwrap();
    assert_eq!(broken.name, "Broken");
    assert_eq!(broken.value, "");
    assert_eq!(error_kinds(&mapping.errors), vec![MappingErrorKind::AssignmentFailure]);
    assert_eq!(mapping.errors[0].target_type(), "EmbedField");
}

#[test]
fn test_qualified_paths_locate_the_failing_entry() {
    let payload = embed_payload(json!({
        "0": embed_field("Added", "typed events"),
        "1": {"name": "Broken", "value": ["not", "text"]}
    }));

    let mapping = qualifying_mapper().map_completed::<Embed>(&payload);
    assert_eq!(error_fields(&mapping.errors), vec!["fields[1].value"]);
}

#[test]
fn test_non_array_for_array_field() {
    let mapping = quiet_mapper().map_completed::<Embed>(&embed_payload(json!("none")));

    assert_eq!(error_kinds(&mapping.errors), vec![MappingErrorKind::ArrayShapeMismatch]);
    assert_eq!(error_fields(&mapping.errors), vec!["fields"]);
    assert!(mapping.result.unwrap().fields.is_empty());
}

// ============================================================================
// Full REST objects
// ============================================================================

#[test]
fn test_message_from_rest_response() {
    init_test_tracing();

    let channel_id = unique_id();
    let payload = message_payload(&channel_id);
    let message = assert_clean(quiet_mapper().map_completed::<Message>(&payload));

    assert_eq!(message.channel_id.to_string(), channel_id);
    assert_eq!(message.message_type, Some(MessageType::Default));
    assert_eq!(message.flags, Some(MessageFlags::empty()));
    assert_eq!(message.content, "Supa Hot");
    assert!(!message.is_edited());
    assert_eq!(
        message.timestamp.map(|timestamp| timestamp.timestamp_millis()),
        Some(1_499_794_027_299)
    );

    let embed = message.embeds.get(0).unwrap();
    assert_eq!(embed.fields.len(), 1);
    let reaction = message.reactions.get(0).unwrap();
    assert_eq!(reaction.emoji.as_ref().and_then(|emoji| emoji.name.as_deref()), Some("🔥"));
}

#[test]
fn test_message_list_response() {
    let channel_id = unique_id();
    let body = json!([message_payload(&channel_id), "garbage", message_payload(&channel_id)]);

    let messages = quiet_mapper().map_array::<Message>(&body);
    assert_eq!(messages.len(), 3);
    assert!(messages[0].is_some());
    assert!(messages[1].is_none());
    assert!(messages[2].is_some());
}

#[test]
fn test_decode_then_map() {
    let body = json!({"id": "41771983423143937", "name": "hype", "animated": true}).to_string();
    let emoji = assert_clean(quiet_mapper().map_json::<Emoji>(&body).unwrap());
    assert!(emoji.is_custom());

    assert!(quiet_mapper().map_json::<Emoji>("{\"id\":").is_err());
}

#[test]
fn test_widget_members() {
    let mapping = quiet_mapper().map_completed::<Widget>(&json!({
        "id": "290926798626357250",
        "name": "Test Server",
        "instant_invite": null,
        "channels": [],
        "members": [
            {"id": "0", "username": "Tester", "discriminator": "0000", "avatar": null, "status": "online"}
        ],
        "presence_count": 1
    }));

    let widget = mapping.result.unwrap();
    assert_eq!(widget.members.len(), 1);
    assert_eq!(error_kinds(&mapping.errors), vec![MappingErrorKind::UnknownField]);
    assert_eq!(error_fields(&mapping.errors), vec!["status"]);
}

#[test]
fn test_strict_callers_reject_partial_objects() {
    let mut payload = json!({
        "id": "969707018069872670",
        "guild_id": "613425648685547541",
        "name": "Keyword Filter",
        "creator_id": "423457898095789043",
        "event_type": 1,
        "trigger_type": 1,
        "actions": [{"type": 1}],
        "enabled": true,
        "exempt_roles": [],
        "exempt_channels": []
    });

    let rule = chat_common::AppError::require(
        quiet_mapper().map_completed::<AutoModerationRule>(&payload),
    )
    .unwrap();
    assert!(rule.enabled);

    payload["enabled"] = json!("yes");
    let err = chat_common::AppError::require(
        quiet_mapper().map_completed::<AutoModerationRule>(&payload),
    )
    .unwrap_err();
    assert_eq!(err.error_code(), "MAPPING_ERROR");
}
