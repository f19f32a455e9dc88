// Assistants backend over HTTP

use crate::config::AssistantConfig;
use crate::traits::AssistantsApi;
use crate::types::{CreateMessage, CreateRun, MessageList, Run, Thread};
use async_trait::async_trait;
use justplay_http::{ApiClient, ClientError, Method};

const BETA_HEADER_NAME: &str = "OpenAI-Beta";

/// Assistants client (HTTP direct, no SDK)
#[derive(Debug, Clone)]
pub struct AssistantsClient {
    api: ApiClient,
    api_key: String,
    base_url: String,
}

impl AssistantsClient {
    pub fn new(config: &AssistantConfig) -> Result<Self, ClientError> {
        let api = ApiClient::builder()
            .default_header(BETA_HEADER_NAME, config.beta_header.clone())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            api,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AssistantsApi for AssistantsClient {
    async fn create_thread(&self) -> Result<Thread, ClientError> {
        self.api
            .send_json::<(), _>(Method::POST, &self.url("/threads"), &self.api_key, None)
            .await
    }

    async fn post_message(&self, thread_id: &str, content: &str) -> Result<(), ClientError> {
        let body = CreateMessage::user(content);
        self.api
            .send_no_content(
                Method::POST,
                &self.url(&format!("/threads/{}/messages", thread_id)),
                &self.api_key,
                Some(&body),
            )
            .await
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run, ClientError> {
        let body = CreateRun { assistant_id };
        self.api
            .send_json(
                Method::POST,
                &self.url(&format!("/threads/{}/runs", thread_id)),
                &self.api_key,
                Some(&body),
            )
            .await
    }

    async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<Run, ClientError> {
        self.api
            .get_json(
                &self.url(&format!("/threads/{}/runs/{}", thread_id, run_id)),
                &self.api_key,
            )
            .await
    }

    async fn list_messages(&self, thread_id: &str) -> Result<MessageList, ClientError> {
        self.api
            .get_json(
                &self.url(&format!("/threads/{}/messages", thread_id)),
                &self.api_key,
            )
            .await
    }
}
