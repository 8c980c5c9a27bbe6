//! Application command parts

use std::collections::HashMap;

use chat_mapper::{Mappable, MappedArray, TypeDescriptor};
use serde_json::Value;

use crate::enums::{ApplicationCommandPermissionType, ApplicationCommandType};
use crate::value_objects::{Permissions, Snowflake};

/// Registered slash or context menu command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationCommand {
    pub id: Snowflake,
    pub command_type: Option<ApplicationCommandType>,
    pub application_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub name: String,
    pub name_localizations: Option<HashMap<String, String>>,
    pub description: String,
    pub description_localizations: Option<HashMap<String, String>>,
    pub options: Vec<Value>,
    pub default_member_permissions: Option<Permissions>,
    pub dm_permission: Option<bool>,
    pub default_permission: Option<bool>,
    pub nsfw: Option<bool>,
    pub version: Snowflake,
}

impl ApplicationCommand {
    /// Guild commands are only available in the guild they were registered for
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.guild_id.is_none()
    }

    /// Localized name, falling back to the default name
    pub fn localized_name(&self, locale: &str) -> &str {
        self.name_localizations
            .as_ref()
            .and_then(|names| names.get(locale))
            .map_or(self.name.as_str(), String::as_str)
    }
}

impl Mappable for ApplicationCommand {
    const TYPE_NAME: &'static str = "ApplicationCommand";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |command: &mut Self, id| command.id = id)
            .enumeration("type", |command: &mut Self, kind| command.command_type = kind)
            .scalar("application_id", |command: &mut Self, id| command.application_id = id)
            .scalar("guild_id", |command: &mut Self, id| command.guild_id = id)
            .scalar("name", |command: &mut Self, name| command.name = name)
            .scalar("name_localizations", |command: &mut Self, names| {
                command.name_localizations = names;
            })
            .scalar("description", |command: &mut Self, text| command.description = text)
            .scalar("description_localizations", |command: &mut Self, texts| {
                command.description_localizations = texts;
            })
            .array("options", |command: &mut Self, options| command.options = options)
            .object("default_member_permissions", |command: &mut Self, permissions| {
                command.default_member_permissions = permissions;
            })
            .scalar("dm_permission", |command: &mut Self, allowed| command.dm_permission = allowed)
            .scalar("default_permission", |command: &mut Self, allowed| {
                command.default_permission = allowed;
            })
            .scalar("nsfw", |command: &mut Self, nsfw| command.nsfw = nsfw)
            .scalar("version", |command: &mut Self, version| command.version = version)
            .build()
    }
}

/// One permission overwrite of a command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationCommandPermissions {
    /// Role, user or channel id
    pub id: Snowflake,
    pub permission_type: Option<ApplicationCommandPermissionType>,
    pub permission: bool,
}

impl Mappable for ApplicationCommandPermissions {
    const TYPE_NAME: &'static str = "ApplicationCommandPermissions";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |overwrite: &mut Self, id| overwrite.id = id)
            .enumeration("type", |overwrite: &mut Self, kind| overwrite.permission_type = kind)
            .scalar("permission", |overwrite: &mut Self, allowed| overwrite.permission = allowed)
            .build()
    }
}

/// Permission overwrites of one command in one guild
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationCommandPermissionsObject {
    /// Command id, or the application id for application-wide overwrites
    pub id: Snowflake,
    pub application_id: Snowflake,
    pub guild_id: Snowflake,
    pub permissions: MappedArray<ApplicationCommandPermissions>,
}

impl ApplicationCommandPermissionsObject {
    /// Overwrite for a role, user or channel id, if one is set
    #[must_use]
    pub fn permission_for(&self, target: Snowflake) -> Option<bool> {
        self.permissions
            .values()
            .find(|overwrite| overwrite.id == target)
            .map(|overwrite| overwrite.permission)
    }

    /// Whether these overwrites apply to every command of the application
    #[must_use]
    pub fn is_application_wide(&self) -> bool {
        self.id == self.application_id
    }
}

impl Mappable for ApplicationCommandPermissionsObject {
    const TYPE_NAME: &'static str = "ApplicationCommandPermissionsObject";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |object: &mut Self, id| object.id = id)
            .scalar("application_id", |object: &mut Self, id| object.application_id = id)
            .scalar("guild_id", |object: &mut Self, id| object.guild_id = id)
            .object_array("permissions", |object: &mut Self, overwrites| {
                object.permissions = overwrites;
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_mapper::{Mapper, MappingErrorKind};
    use serde_json::json;

    #[test]
    fn test_map_command() {
        let mapping = Mapper::default().map::<ApplicationCommand>(&json!({
            "id": "1000000000000000001",
            "type": 1,
            "application_id": "1000000000000000000",
            "name": "permissions",
            "name_localizations": {"de": "berechtigungen"},
            "description": "Get or edit permissions for a user or a role",
            "description_localizations": null,
            "options": [{"name": "user", "type": 6, "description": "The user"}],
            "default_member_permissions": "8",
            "dm_permission": false,
            "version": "1000000000000000002"
        }));

        assert!(mapping.errors.is_empty(), "{:?}", mapping.errors);
        let command = mapping.result.unwrap();
        assert!(command.is_global());
        assert_eq!(command.command_type, Some(ApplicationCommandType::ChatInput));
        assert_eq!(command.localized_name("de"), "berechtigungen");
        assert_eq!(command.localized_name("fr"), "permissions");
        assert_eq!(command.description_localizations, None);
        assert_eq!(command.options.len(), 1);
        assert_eq!(command.default_member_permissions, Some(Permissions::ADMINISTRATOR));
    }

    #[test]
    fn test_map_permissions_object() {
        let mapping = Mapper::default().map::<ApplicationCommandPermissionsObject>(&json!({
            "id": "1000000000000000000",
            "application_id": "1000000000000000000",
            "guild_id": "2000000000000000000",
            "permissions": [
                {"id": "3000000000000000001", "type": 1, "permission": true},
                {"id": "3000000000000000002", "type": 2, "permission": false},
                {"id": "3000000000000000003", "type": "channel", "permission": true}
            ]
        }));

        let object = mapping.result.unwrap();
        assert!(object.is_application_wide());
        assert_eq!(object.permission_for(Snowflake::new(3_000_000_000_000_000_001)), Some(true));
        assert_eq!(object.permission_for(Snowflake::new(3_000_000_000_000_000_002)), Some(false));
        assert_eq!(object.permission_for(Snowflake::new(4)), None);

        // The faulty overwrite keeps its slot, only its type is missing
        assert_eq!(object.permissions.len(), 3);
        assert_eq!(object.permissions.get(2).and_then(|overwrite| overwrite.permission_type), None);
        assert_eq!(mapping.errors.len(), 1);
        assert_eq!(mapping.errors[0].kind(), MappingErrorKind::EnumLookupFailure);
        assert_eq!(mapping.errors[0].target_type(), "ApplicationCommandPermissions");
    }
}
