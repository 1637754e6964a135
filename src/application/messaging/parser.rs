//! Command parser - Turns slash command text into lending commands

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::domain::entities::LendingCommand;

const STATUS_KEYWORDS: [&str; 3] = ["현황", "상태", "status"];

static RENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:대여|빌려|rent)\s+(\S+)(?:\s+(.+))?$").expect("valid rent pattern")
});

static RETURN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:반납|return)\s+(\S+)(?:\s+(.+))?$").expect("valid return pattern")
});

static TRANSFER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:전달|transfer)\s+(\S+)\s+(\S+)\s+(\S+)$").expect("valid transfer pattern")
});

/// Parses the text typed after the slash command
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    /// Classify a command body.
    ///
    /// Patterns are tried in order (status, rent, return, transfer) and the
    /// first match wins; anything else is a request for help.
    pub fn parse(&self, text: &str) -> LendingCommand {
        // regex-lite's \s is ASCII-only; fold full-width and no-break spaces first
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let raw = collapsed.as_str();

        let lowered = raw.to_lowercase();
        if STATUS_KEYWORDS.contains(&lowered.as_str()) {
            return LendingCommand::Status;
        }

        if let Some(caps) = RENT_RE.captures(raw) {
            return LendingCommand::Rent {
                category: caps[1].trim().to_string(),
                person: optional_name(caps.get(2)),
            };
        }

        if let Some(caps) = RETURN_RE.captures(raw) {
            return LendingCommand::Return {
                category: caps[1].trim().to_string(),
                person: optional_name(caps.get(2)),
            };
        }

        if let Some(caps) = TRANSFER_RE.captures(raw) {
            return LendingCommand::Transfer {
                category: caps[1].trim().to_string(),
                from: caps[2].trim().to_string(),
                to: caps[3].trim().to_string(),
            };
        }

        LendingCommand::Help
    }
}

fn optional_name(m: Option<regex_lite::Match<'_>>) -> Option<String> {
    m.map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}
