pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod orchestrator;
pub mod traits;
pub mod types;

pub use client::AssistantsClient;
pub use config::{AssistantConfig, PollPolicy};
pub use error::AssistantError;
pub use extract::extract_reply;
pub use orchestrator::{ConversationOrchestrator, OrchestrationState};
pub use traits::AssistantsApi;
pub use types::{MessageContent, MessageList, Run, RunStatus, Text, Thread, ThreadMessage};
