//! User part - a platform account as seen in payloads

use chat_mapper::{Mappable, TypeDescriptor};

use crate::value_objects::Snowflake;

/// User object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub discriminator: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
    pub bot: Option<bool>,
    pub system: Option<bool>,
    pub mfa_enabled: Option<bool>,
    pub banner: Option<String>,
    pub accent_color: Option<u32>,
    pub locale: Option<String>,
    pub verified: Option<bool>,
    pub email: Option<String>,
    pub flags: Option<u64>,
    pub premium_type: Option<u8>,
    pub public_flags: Option<u64>,
}

impl User {
    /// Get the full tag: username#discriminator
    ///
    /// Accounts migrated to unique usernames carry discriminator "0" and are
    /// shown by username alone.
    pub fn tag(&self) -> String {
        if self.discriminator.is_empty() || self.discriminator == "0" {
            self.username.clone()
        } else {
            format!("{}#{}", self.username, self.discriminator)
        }
    }

    /// Name to show in a client: global name, falling back to username
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }

    /// Get avatar path or default avatar path
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => format!("/avatars/{}/{}.png", self.id, hash),
            None => format!("/embed/avatars/{}.png", self.default_avatar_index()),
        }
    }

    fn default_avatar_index(&self) -> u64 {
        match self.discriminator.parse::<u16>() {
            Ok(discriminator) if discriminator != 0 => u64::from(discriminator % 5),
            _ => (self.id.into_inner() >> 22) % 6,
        }
    }

    /// Check if user is a bot account
    #[inline]
    pub fn is_bot(&self) -> bool {
        self.bot.unwrap_or(false)
    }

    /// Check if user is a system account
    #[inline]
    pub fn is_system(&self) -> bool {
        self.system.unwrap_or(false)
    }
}

impl Mappable for User {
    const TYPE_NAME: &'static str = "User";

    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder()
            .scalar("id", |user: &mut Self, id| user.id = id)
            .scalar("username", |user: &mut Self, username| user.username = username)
            .scalar("discriminator", |user: &mut Self, discriminator| {
                user.discriminator = discriminator;
            })
            .scalar("global_name", |user: &mut Self, name| user.global_name = name)
            .scalar("avatar", |user: &mut Self, avatar| user.avatar = avatar)
            .scalar("bot", |user: &mut Self, bot| user.bot = bot)
            .scalar("system", |user: &mut Self, system| user.system = system)
            .scalar("mfa_enabled", |user: &mut Self, enabled| user.mfa_enabled = enabled)
            .scalar("banner", |user: &mut Self, banner| user.banner = banner)
            .scalar("accent_color", |user: &mut Self, color| user.accent_color = color)
            .scalar("locale", |user: &mut Self, locale| user.locale = locale)
            .scalar("verified", |user: &mut Self, verified| user.verified = verified)
            .scalar("email", |user: &mut Self, email| user.email = email)
            .scalar("flags", |user: &mut Self, flags| user.flags = flags)
            .scalar("premium_type", |user: &mut Self, premium| user.premium_type = premium)
            .scalar("public_flags", |user: &mut Self, flags| user.public_flags = flags)
            .build()
    }
}
