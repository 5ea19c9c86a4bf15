//! Help command - shows available commands

/// Execute the help command
pub fn execute() -> String {
    "👋 Hi! Here is what I can do:\n\
    /add <name> - save your next voice note or audio file as <name>\n\
    /send <name> - play a saved clip\n\
    /list - show all saved clips\n\
    /today - clip of the day\n\n\
    You can also type @<bot> <text> in any chat to search clips inline."
        .to_string()
}
