// Wire types for the threads / messages / runs endpoints

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-side conversation context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
}

/// Body of a message submission
#[derive(Debug, Clone, Serialize)]
pub struct CreateMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> CreateMessage<'a> {
    pub fn user(content: &'a str) -> Self {
        Self { role: "user", content }
    }
}

/// Body of a run creation
#[derive(Debug, Clone, Serialize)]
pub struct CreateRun<'a> {
    pub assistant_id: &'a str,
}

/// Unit of asynchronous work executing one conversational turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub id: String,
    pub status: RunStatus,
}

/// Lifecycle status of a [`Run`].
///
/// Statuses this crate does not know are kept verbatim in `Unknown` so the
/// caller can still report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunStatus {
    Queued,
    InProgress,
    RequiresAction,
    Cancelling,
    Cancelled,
    Failed,
    Completed,
    Incomplete,
    Expired,
    Unknown(String),
}

impl RunStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Queued => "queued",
            Self::InProgress => "in_progress",
            Self::RequiresAction => "requires_action",
            Self::Cancelling => "cancelling",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
            Self::Completed => "completed",
            Self::Incomplete => "incomplete",
            Self::Expired => "expired",
            Self::Unknown(s) => s,
        }
    }

    /// Statuses that keep the orchestrator polling
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Queued | Self::InProgress)
    }
}

impl From<String> for RunStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "queued" => Self::Queued,
            "in_progress" => Self::InProgress,
            "requires_action" => Self::RequiresAction,
            "cancelling" => Self::Cancelling,
            "cancelled" => Self::Cancelled,
            "failed" => Self::Failed,
            "completed" => Self::Completed,
            "incomplete" => Self::Incomplete,
            "expired" => Self::Expired,
            _ => Self::Unknown(s),
        }
    }
}

impl From<RunStatus> for String {
    fn from(status: RunStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message read back from a thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadMessage {
    pub role: String,
    #[serde(default)]
    pub content: Vec<MessageContent>,
}

impl ThreadMessage {
    pub fn is_assistant(&self) -> bool {
        self.role == "assistant"
    }

    /// Text of the first text-bearing content part
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find_map(|part| part.text.as_ref().map(|t| t.value.as_str()))
    }
}

/// One content part. Non-text parts (images, files) have no `text`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

/// Message listing, newest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageList {
    #[serde(default)]
    pub data: Vec<ThreadMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_run_status_parses_known_values() {
        let run: Run = serde_json::from_value(json!({"id": "run_1", "status": "in_progress"})).unwrap();
        assert_eq!(run.status, RunStatus::InProgress);
        assert!(run.status.is_pending());

        let run: Run = serde_json::from_value(json!({"id": "run_1", "status": "requires_action"})).unwrap();
        assert_eq!(run.status, RunStatus::RequiresAction);
        assert!(!run.status.is_pending());
    }

    #[test]
    fn test_run_status_keeps_unrecognized_value() {
        let run: Run = serde_json::from_value(json!({"id": "run_1", "status": "paused"})).unwrap();
        assert_eq!(run.status, RunStatus::Unknown("paused".to_string()));
        assert_eq!(run.status.to_string(), "paused");
        assert!(!run.status.is_pending());
    }

    #[test]
    fn test_run_ignores_extra_fields() {
        let run: Run = serde_json::from_value(json!({
            "id": "run_1",
            "object": "thread.run",
            "assistant_id": "asst_1",
            "status": "queued"
        }))
        .unwrap();
        assert_eq!(run.status, RunStatus::Queued);
    }

    #[test]
    fn test_message_text_skips_non_text_parts() {
        let msg: ThreadMessage = serde_json::from_value(json!({
            "role": "assistant",
            "content": [
                {"type": "image_file", "image_file": {"file_id": "file_1"}},
                {"type": "text", "text": {"value": "Artist: Daft Punk", "annotations": []}}
            ]
        }))
        .unwrap();

        assert!(msg.is_assistant());
        assert_eq!(msg.text(), Some("Artist: Daft Punk"));
    }

    #[test]
    fn test_create_message_body() {
        let body = serde_json::to_value(CreateMessage::user("play daft punk")).unwrap();
        assert_eq!(body, json!({"role": "user", "content": "play daft punk"}));
    }
}
