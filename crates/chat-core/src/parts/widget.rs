use chat_mapper::{Mappable, MappedArray, TypeDescriptor};

use crate::parts::{Channel, User};
use crate::value_objects::Snowflake;

/// Public guild widget
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Widget {
    pub id: Snowflake,
    pub name: String,
    pub instant_invite: Option<String>,
    pub channels: MappedArray<Channel>,
    pub members: MappedArray<User>,
    pub presence_count: u32,
}

impl Mappable for Widget {
    const TYPE_NAME: &'static str = "Widget";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |widget: &mut Self, id| widget.id = id)
            .scalar("name", |widget: &mut Self, name| widget.name = name)
            .scalar("instant_invite", |widget: &mut Self, invite| widget.instant_invite = invite)
            .object_array("channels", |widget: &mut Self, channels| widget.channels = channels)
            .object_array("members", |widget: &mut Self, members| widget.members = members)
            .scalar("presence_count", |widget: &mut Self, count| widget.presence_count = count)
            .build()
    }
}
