int_backed_enum! {
    pub enum ApplicationCommandType {
        /// Slash command
        ChatInput = 1,
        /// Context menu command on a user
        User = 2,
        /// Context menu command on a message
        Message = 3,
    }
}

int_backed_enum! {
    /// What an application command permission overwrite targets
    pub enum ApplicationCommandPermissionType {
        Role = 1,
        User = 2,
        Channel = 3,
    }
}
