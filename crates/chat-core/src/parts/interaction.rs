use chat_mapper::{Mappable, TypeDescriptor};
use serde_json::Value;

use crate::enums::ApplicationCommandType;
use crate::value_objects::Snowflake;

/// Data of an application command or component interaction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionData {
    pub id: Option<Snowflake>,
    pub name: Option<String>,
    pub command_type: Option<ApplicationCommandType>,
    pub resolved: Option<Value>,
    pub options: Vec<Value>,
    pub guild_id: Option<Snowflake>,
    pub target_id: Option<Snowflake>,
    pub custom_id: Option<String>,
    pub component_type: Option<u8>,
    pub values: Vec<String>,
}

impl InteractionData {
    /// Raw value of a top-level option by name
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options
            .iter()
            .find(|option| option.get("name").and_then(Value::as_str) == Some(name))
            .and_then(|option| option.get("value"))
    }

    /// Whether this data came from a message component rather than a command
    #[must_use]
    pub fn is_component(&self) -> bool {
        self.custom_id.is_some()
    }
}

impl Mappable for InteractionData {
    const TYPE_NAME: &'static str = "InteractionData";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |data: &mut Self, id| data.id = id)
            .scalar("name", |data: &mut Self, name| data.name = name)
            .enumeration("type", |data: &mut Self, kind| data.command_type = kind)
            .union("resolved", |data: &mut Self, resolved| data.resolved = resolved)
            .array("options", |data: &mut Self, options| data.options = options)
            .scalar("guild_id", |data: &mut Self, id| data.guild_id = id)
            .scalar("target_id", |data: &mut Self, id| data.target_id = id)
            .scalar("custom_id", |data: &mut Self, id| data.custom_id = id)
            .scalar("component_type", |data: &mut Self, kind| data.component_type = kind)
            .array("values", |data: &mut Self, values| data.values = values)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_mapper::Mapper;
    use serde_json::json;

    #[test]
    fn test_map_command_data() {
        let mapping = Mapper::default().map::<InteractionData>(&json!({
            "id": "771825006014889984",
            "name": "blep",
            "type": 1,
            "options": [
                {"type": 3, "name": "animal", "value": "animal_dog"},
                {"type": 5, "name": "only_smol", "value": true}
            ]
        }));

        assert!(mapping.errors.is_empty(), "{:?}", mapping.errors);
        let data = mapping.result.unwrap();
        assert!(!data.is_component());
        assert_eq!(data.command_type, Some(ApplicationCommandType::ChatInput));
        assert_eq!(data.option("animal"), Some(&json!("animal_dog")));
        assert_eq!(data.option("only_smol"), Some(&json!(true)));
        assert_eq!(data.option("size"), None);
    }

    #[test]
    fn test_map_component_data() {
        let mapping = Mapper::default().map::<InteractionData>(&json!({
            "custom_id": "class_select_1",
            "component_type": 3,
            "values": ["mage", "rogue"]
        }));

        let data = mapping.result.unwrap();
        assert!(data.is_component());
        assert_eq!(data.values, vec!["mage".to_string(), "rogue".to_string()]);
    }
}
