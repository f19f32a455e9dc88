use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single request/response exchange.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("failed to create HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("invalid value for header {0}")]
    InvalidHeader(String),

    #[error("error marshalling request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("error making request: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx response. The raw body is kept verbatim for diagnostics.
    #[error("API request failed with status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("error decoding response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// Upstream HTTP status, if the backend answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
