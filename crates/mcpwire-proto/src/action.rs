use serde::{Deserialize, Serialize};
use std::fmt;

/// Tool-execution actions understood by MCP peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum McpAction {
    Submit,
    Stream,
    Execute,
    Cancel,
}

impl McpAction {
    /// Wire form of the action, also used as the envelope's `method`.
    pub fn as_str(&self) -> &'static str {
        match self {
            McpAction::Submit => "submit",
            McpAction::Stream => "stream",
            McpAction::Execute => "execute",
            McpAction::Cancel => "cancel",
        }
    }
}

impl fmt::Display for McpAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome classification carried by every MCP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum McpStatus {
    Success,
    Error,
    Partial,
}

impl McpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            McpStatus::Success => "success",
            McpStatus::Error => "error",
            McpStatus::Partial => "partial",
        }
    }
}

impl fmt::Display for McpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&McpAction::Submit).unwrap(), "\"submit\"");
        assert_eq!(serde_json::to_string(&McpAction::Stream).unwrap(), "\"stream\"");
        assert_eq!(serde_json::to_string(&McpAction::Execute).unwrap(), "\"execute\"");
        assert_eq!(serde_json::to_string(&McpAction::Cancel).unwrap(), "\"cancel\"");
    }

    #[test]
    fn test_action_round_trip() {
        for action in [
            McpAction::Submit,
            McpAction::Stream,
            McpAction::Execute,
            McpAction::Cancel,
        ] {
            let encoded = serde_json::to_string(&action).unwrap();
            let decoded: McpAction = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, action);
            assert_eq!(encoded, format!("\"{}\"", action.as_str()));
        }
    }

    #[test]
    fn test_status_wire_form_matches_as_str() {
        for status in [McpStatus::Success, McpStatus::Error, McpStatus::Partial] {
            let encoded = serde_json::to_string(&status).unwrap();
            assert_eq!(encoded, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(McpAction::Execute.to_string(), "execute");
        assert_eq!(McpStatus::Partial.to_string(), "partial");
    }
}
