//! Parsed slash commands

/// A lending command as typed after the slash command.
///
/// Category text is kept exactly as the user wrote it; resolving it to a
/// [`Category`](super::Category) is the dispatcher's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LendingCommand {
    Status,
    Rent {
        category: String,
        person: Option<String>,
    },
    Return {
        category: String,
        person: Option<String>,
    },
    Transfer {
        category: String,
        from: String,
        to: String,
    },
    Help,
}

impl LendingCommand {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            LendingCommand::Status => "status",
            LendingCommand::Rent { .. } => "rent",
            LendingCommand::Return { .. } => "return",
            LendingCommand::Transfer { .. } => "transfer",
            LendingCommand::Help => "help",
        }
    }

    /// Raw category text, for commands that carry one
    pub fn category(&self) -> Option<&str> {
        match self {
            LendingCommand::Rent { category, .. }
            | LendingCommand::Return { category, .. }
            | LendingCommand::Transfer { category, .. } => Some(category.as_str()),
            LendingCommand::Status | LendingCommand::Help => None,
        }
    }
}
