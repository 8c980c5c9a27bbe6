int_backed_enum! {
    /// Kind of a message
    pub enum MessageType {
        Default = 0,
        RecipientAdd = 1,
        RecipientRemove = 2,
        Call = 3,
        ChannelNameChange = 4,
        ChannelIconChange = 5,
        ChannelPinnedMessage = 6,
        UserJoin = 7,
        GuildBoost = 8,
        GuildBoostTier1 = 9,
        GuildBoostTier2 = 10,
        GuildBoostTier3 = 11,
        ChannelFollowAdd = 12,
        GuildDiscoveryDisqualified = 14,
        GuildDiscoveryRequalified = 15,
        GuildDiscoveryGracePeriodInitialWarning = 16,
        GuildDiscoveryGracePeriodFinalWarning = 17,
        ThreadCreated = 18,
        Reply = 19,
        ChatInputCommand = 20,
        ThreadStarterMessage = 21,
        GuildInviteReminder = 22,
        ContextMenuCommand = 23,
        AutoModerationAction = 24,
        RoleSubscriptionPurchase = 25,
    }
}

impl MessageType {
    /// Whether a user can delete a message of this type
    #[must_use]
    pub fn is_deletable(self) -> bool {
        !matches!(
            self,
            Self::RecipientAdd
                | Self::RecipientRemove
                | Self::Call
                | Self::ChannelNameChange
                | Self::ChannelIconChange
                | Self::ThreadStarterMessage
        )
    }
}

int_backed_enum! {
    /// Rich presence activity attached to a message
    pub enum MessageActivityType {
        Join = 1,
        Spectate = 2,
        Listen = 3,
        JoinRequest = 5,
    }
}

string_backed_enum! {
    /// Embed kind; webhooks and bots always send `rich`
    pub enum EmbedType {
        Rich = "rich",
        Image = "image",
        Video = "video",
        Gifv = "gifv",
        Article = "article",
        Link = "link",
    }
}
