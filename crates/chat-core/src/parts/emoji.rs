use chat_mapper::{Mappable, TypeDescriptor};

use crate::parts::User;
use crate::value_objects::Snowflake;

/// Custom or unicode emoji
///
/// Unicode emoji carry only a `name`; custom emoji have an `id` and may have
/// lost their name when the emoji was deleted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Emoji {
    pub id: Option<Snowflake>,
    pub name: Option<String>,
    pub roles: Vec<Snowflake>,
    pub user: Option<User>,
    pub require_colons: Option<bool>,
    pub managed: Option<bool>,
    pub animated: Option<bool>,
    pub available: Option<bool>,
}

impl Emoji {
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.id.is_some()
    }

    /// Form used in reaction endpoints: `name:id` for custom emoji
    pub fn reaction_key(&self) -> String {
        let name = self.name.as_deref().unwrap_or_default();
        match self.id {
            Some(id) => format!("{name}:{id}"),
            None => name.to_string(),
        }
    }

    /// Message markup for this emoji
    pub fn mention(&self) -> String {
        let name = self.name.as_deref().unwrap_or_default();
        match (self.id, self.animated.unwrap_or(false)) {
            (Some(id), true) => format!("<a:{name}:{id}>"),
            (Some(id), false) => format!("<:{name}:{id}>"),
            (None, _) => name.to_string(),
        }
    }
}

impl Mappable for Emoji {
    const TYPE_NAME: &'static str = "Emoji";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |emoji: &mut Self, id| emoji.id = id)
            .scalar("name", |emoji: &mut Self, name| emoji.name = name)
            .array("roles", |emoji: &mut Self, roles| emoji.roles = roles)
            .object("user", |emoji: &mut Self, user| emoji.user = user)
            .scalar("require_colons", |emoji: &mut Self, require| emoji.require_colons = require)
            .scalar("managed", |emoji: &mut Self, managed| emoji.managed = managed)
            .scalar("animated", |emoji: &mut Self, animated| emoji.animated = animated)
            .scalar("available", |emoji: &mut Self, available| emoji.available = available)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_mapper::Mapper;
    use serde_json::json;

    #[test]
    fn test_unicode_emoji() {
        let emoji = Mapper::default()
            .map::<Emoji>(&json!({"id": null, "name": "🔥"}))
            .result
            .unwrap();

        assert!(!emoji.is_custom());
        assert_eq!(emoji.reaction_key(), "🔥");
        assert_eq!(emoji.mention(), "🔥");
    }

    #[test]
    fn test_custom_emoji() {
        let mapping = Mapper::default().map::<Emoji>(&json!({
            "id": "41771983429993937",
            "name": "LUL",
            "roles": ["41771983429993000", "41771983429993111"],
            "user": {"id": "96008815106887111", "username": "Luigi", "discriminator": "0002"},
            "require_colons": true,
            "managed": false,
            "animated": true
        }));

        assert!(mapping.errors.is_empty(), "{:?}", mapping.errors);
        let emoji = mapping.result.unwrap();
        assert_eq!(emoji.roles.len(), 2);
        assert_eq!(emoji.user.as_ref().map(|user| user.username.as_str()), Some("Luigi"));
        assert_eq!(emoji.reaction_key(), "LUL:41771983429993937");
        assert_eq!(emoji.mention(), "<a:LUL:41771983429993937>");
    }
}
