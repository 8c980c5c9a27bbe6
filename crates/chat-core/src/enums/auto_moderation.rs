int_backed_enum! {
    /// When an auto moderation rule is checked
    pub enum AutoModerationEventType {
        MessageSend = 1,
    }
}

int_backed_enum! {
    /// What triggers an auto moderation rule
    pub enum AutoModerationTriggerType {
        Keyword = 1,
        Spam = 3,
        KeywordPreset = 4,
        MentionSpam = 5,
    }
}

int_backed_enum! {
    /// Platform-maintained word lists
    pub enum AutoModerationKeywordPresetType {
        Profanity = 1,
        SexualContent = 2,
        Slurs = 3,
    }
}

int_backed_enum! {
    pub enum AutoModerationActionType {
        BlockMessage = 1,
        SendAlertMessage = 2,
        Timeout = 3,
    }
}
