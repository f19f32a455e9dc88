// Single-exchange JSON-over-HTTP executor shared by every backend client

use crate::error::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// HTTP client that performs exactly one request per call (no retries).
///
/// Every request carries `Content-Type: application/json` and a bearer
/// `Authorization` header. Extra headers configured on the builder (for
/// example a backend version header) are attached to every request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Client with no extra headers and the transport's default timeout
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Send one request and classify the outcome.
    ///
    /// A `None` body sends no body at all, which is different from sending
    /// an empty JSON document. Any status outside `[200, 300)` becomes
    /// [`ClientError::Api`] carrying the raw response text.
    pub async fn execute<B>(
        &self,
        method: Method,
        url: &str,
        bearer_token: &str,
        body: Option<&B>,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self
            .http_client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(bearer_token);

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(ClientError::Encode)?;
            request = request.body(payload);
        }

        tracing::debug!(method = %method, url = %url, has_body = body.is_some(), "Sending request");

        let response = request.send().await.map_err(ClientError::Transport)?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());

            tracing::warn!(method = %method, url = %url, status = %status, "Upstream request failed");

            return Err(ClientError::Api { status, body });
        }

        Ok(response)
    }

    /// Send a request and decode the response body into `T`
    pub async fn send_json<B, T>(
        &self,
        method: Method,
        url: &str,
        bearer_token: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(method, url, bearer_token, body).await?;
        let bytes = response.bytes().await.map_err(ClientError::Transport)?;

        serde_json::from_slice(&bytes).map_err(ClientError::Decode)
    }

    /// Send a request whose response body is never decoded
    pub async fn send_no_content<B>(
        &self,
        method: Method,
        url: &str,
        bearer_token: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, url, bearer_token, body).await?;
        Ok(())
    }

    /// `GET` without a request body, decoding the response
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str, bearer_token: &str) -> Result<T> {
        self.send_json::<(), T>(Method::GET, url, bearer_token, None)
            .await
    }
}

/// Builder for [`ApiClient`]
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Attach a header to every request sent by the client
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Overall per-request timeout. Unset means the transport default.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ClientError::InvalidHeader(name.clone()))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| ClientError::InvalidHeader(name.clone()))?;
            headers.insert(header_name, header_value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build().map_err(ClientError::Build)?;

        Ok(ApiClient { http_client })
    }
}
