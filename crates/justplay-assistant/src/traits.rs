use crate::types::{MessageList, Run, Thread};
use async_trait::async_trait;
use justplay_http::ClientError;

/// Transport seam for the threads/runs backend.
///
/// One method per endpoint the orchestrator drives. Implementations perform a
/// single exchange per call and never retry.
#[async_trait]
pub trait AssistantsApi: Send + Sync {
    async fn create_thread(&self) -> Result<Thread, ClientError>;

    /// Submit a user message. The backend's response body is not read.
    async fn post_message(&self, thread_id: &str, content: &str) -> Result<(), ClientError>;

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run, ClientError>;

    async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<Run, ClientError>;

    /// All messages on the thread, newest first
    async fn list_messages(&self, thread_id: &str) -> Result<MessageList, ClientError>;
}
