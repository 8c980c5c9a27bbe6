//! Embed parts - rich content attached to messages

use chat_mapper::{Mappable, MappedArray, TypeDescriptor};
use serde_json::Value;

use crate::enums::EmbedType;
use crate::value_objects::Timestamp;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Embed {
    pub title: Option<String>,
    pub embed_type: Option<EmbedType>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub timestamp: Option<Timestamp>,
    pub color: Option<u32>,
    pub footer: Option<EmbedFooter>,
    pub image: Option<EmbedImage>,
    pub thumbnail: Option<EmbedImage>,
    pub video: Option<EmbedImage>,
    pub provider: Option<Value>,
    pub author: Option<EmbedAuthor>,
    pub fields: MappedArray<EmbedField>,
}

impl Embed {
    /// Characters counted against the platform's per-embed text limit
    pub fn text_length(&self) -> usize {
        let len = |text: &Option<String>| text.as_deref().map_or(0, |text| text.chars().count());

        len(&self.title)
            + len(&self.description)
            + self.footer.as_ref().map_or(0, |footer| footer.text.chars().count())
            + self.author.as_ref().map_or(0, |author| author.name.chars().count())
            + self
                .fields
                .values()
                .map(|field| field.name.chars().count() + field.value.chars().count())
                .sum::<usize>()
    }
}

impl Mappable for Embed {
    const TYPE_NAME: &'static str = "Embed";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("title", |embed: &mut Self, title| embed.title = title)
            .enumeration("type", |embed: &mut Self, kind| embed.embed_type = kind)
            .scalar("description", |embed: &mut Self, text| embed.description = text)
            .scalar("url", |embed: &mut Self, url| embed.url = url)
            .object("timestamp", |embed: &mut Self, at| embed.timestamp = at)
            .scalar("color", |embed: &mut Self, color| embed.color = color)
            .object("footer", |embed: &mut Self, footer| embed.footer = footer)
            .object("image", |embed: &mut Self, image| embed.image = image)
            .object("thumbnail", |embed: &mut Self, image| embed.thumbnail = image)
            .object("video", |embed: &mut Self, video| embed.video = video)
            .union("provider", |embed: &mut Self, provider| embed.provider = provider)
            .object("author", |embed: &mut Self, author| embed.author = author)
            .object_array("fields", |embed: &mut Self, fields| embed.fields = fields)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: Option<String>,
    pub proxy_icon_url: Option<String>,
}

impl Mappable for EmbedFooter {
    const TYPE_NAME: &'static str = "EmbedFooter";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("text", |footer: &mut Self, text| footer.text = text)
            .scalar("icon_url", |footer: &mut Self, url| footer.icon_url = url)
            .scalar("proxy_icon_url", |footer: &mut Self, url| footer.proxy_icon_url = url)
            .build()
    }
}

/// Image, thumbnail or video of an embed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedImage {
    pub url: String,
    pub proxy_url: Option<String>,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

impl Mappable for EmbedImage {
    const TYPE_NAME: &'static str = "EmbedImage";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("url", |image: &mut Self, url| image.url = url)
            .scalar("proxy_url", |image: &mut Self, url| image.proxy_url = url)
            .scalar("height", |image: &mut Self, height| image.height = height)
            .scalar("width", |image: &mut Self, width| image.width = width)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedAuthor {
    pub name: String,
    pub url: Option<String>,
    pub icon_url: Option<String>,
    pub proxy_icon_url: Option<String>,
}

impl Mappable for EmbedAuthor {
    const TYPE_NAME: &'static str = "EmbedAuthor";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("name", |author: &mut Self, name| author.name = name)
            .scalar("url", |author: &mut Self, url| author.url = url)
            .scalar("icon_url", |author: &mut Self, url| author.icon_url = url)
            .scalar("proxy_icon_url", |author: &mut Self, url| author.proxy_icon_url = url)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: Option<bool>,
}

impl Mappable for EmbedField {
    const TYPE_NAME: &'static str = "EmbedField";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("name", |field: &mut Self, name| field.name = name)
            .scalar("value", |field: &mut Self, value| field.value = value)
            .scalar("inline", |field: &mut Self, inline| field.inline = inline)
            .build()
    }
}
