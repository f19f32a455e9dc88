use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

use justplay_assistant::AssistantError;
use justplay_catalog::CatalogError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    Assistant(#[from] AssistantError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Config(_)
            | ApiError::Assistant(_)
            | ApiError::Catalog(_)
            | ApiError::Timeout(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::BadRequest(msg) => {
                tracing::debug!("Rejected request: {}", msg);
            }
            ApiError::Config(msg) => {
                tracing::error!("Config error: {}", msg);
            }
            ApiError::Assistant(e) => {
                tracing::error!("Assistant error: {}", e);
            }
            ApiError::Catalog(e) => {
                tracing::error!("Catalog error: {}", e);
            }
            ApiError::Timeout(limit) => {
                tracing::error!("Handler exceeded {:?}", limit);
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
            }
        }

        // Upstream status and body stay in the message for diagnostics
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
