// Connection and polling settings for the conversational backend

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_ASSISTANT_ID: &str = "asst_WBpwd1j6N1qN6WXUNVU2iCA5";
pub const DEFAULT_BETA_HEADER: &str = "assistants=v2";

/// Shortest pause between two run status fetches
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Configuration for the assistants backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub api_key: String,
    pub base_url: String,
    pub assistant_id: String,
    /// Value of the `OpenAI-Beta` version header
    pub beta_header: String,
    #[serde(default)]
    pub poll: PollPolicy,
    /// Per-request timeout; `None` keeps the transport default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<Duration>,
}

impl AssistantConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            assistant_id: DEFAULT_ASSISTANT_ID.to_string(),
            beta_header: DEFAULT_BETA_HEADER.to_string(),
            poll: PollPolicy::default(),
            request_timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_assistant_id(mut self, assistant_id: impl Into<String>) -> Self {
        self.assistant_id = assistant_id.into();
        self
    }

    pub fn with_beta_header(mut self, beta_header: impl Into<String>) -> Self {
        self.beta_header = beta_header.into();
        self
    }

    pub fn with_poll(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// How the orchestrator waits for a run to leave `queued`/`in_progress`.
///
/// `max_wait` bounds the time from the first sleep to the last status fetch.
/// Intervals below [`MIN_POLL_INTERVAL`] are raised to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_wait: Duration,
}

impl PollPolicy {
    pub fn new(interval: Duration, max_wait: Duration) -> Self {
        Self {
            interval: interval.max(MIN_POLL_INTERVAL),
            max_wait,
        }
    }

    pub fn effective_interval(&self) -> Duration {
        self.interval.max(MIN_POLL_INTERVAL)
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_wait: Duration::from_secs(60),
        }
    }
}
