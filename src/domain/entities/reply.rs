//! Slash command replies

use serde::Serialize;

/// Who gets to see a reply in the channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Shown to everyone in the channel
    InChannel,
    /// Shown only to the user who ran the command
    Ephemeral,
}

/// Slash command response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub response_type: Visibility,
    pub text: String,
}

impl Reply {
    pub fn in_channel(text: impl Into<String>) -> Self {
        Self {
            response_type: Visibility::InChannel,
            text: text.into(),
        }
    }

    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: Visibility::Ephemeral,
            text: text.into(),
        }
    }

    pub fn is_broadcast(&self) -> bool {
        self.response_type == Visibility::InChannel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_slash_command_json() {
        let json = serde_json::to_value(Reply::in_channel("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"response_type": "in_channel", "text": "hi"}));

        let json = serde_json::to_value(Reply::ephemeral("psst")).unwrap();
        assert_eq!(json["response_type"], "ephemeral");
    }
}
