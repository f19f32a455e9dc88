use crate::types::RunStatus;
use justplay_http::ClientError;
use std::time::Duration;
use thiserror::Error;

/// Terminal failure of one orchestration. Each variant names the step that failed.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Error creating thread: {0}")]
    ThreadCreate(#[source] ClientError),

    #[error("Error creating message: {0}")]
    MessagePost(#[source] ClientError),

    #[error("Error creating run: {0}")]
    RunCreate(#[source] ClientError),

    #[error("Error retrieving run: {0}")]
    RunPoll(#[source] ClientError),

    #[error("Error listing messages: {0}")]
    MessageList(#[source] ClientError),

    #[error("Run finished with status: {status}")]
    RunNotCompleted { status: RunStatus },

    #[error("Run {run_id} still {status} after waiting {waited:?}")]
    RunTimeout {
        run_id: String,
        status: RunStatus,
        waited: Duration,
    },

    #[error("failed to create assistants client: {0}")]
    Client(#[source] ClientError),
}

impl AssistantError {
    /// The upstream client error behind this failure, if any
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::ThreadCreate(e)
            | Self::MessagePost(e)
            | Self::RunCreate(e)
            | Self::RunPoll(e)
            | Self::MessageList(e)
            | Self::Client(e) => Some(e),
            Self::RunNotCompleted { .. } | Self::RunTimeout { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
