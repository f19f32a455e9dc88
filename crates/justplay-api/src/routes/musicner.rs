use axum::{body::Bytes, extract::State};
use serde::Deserialize;
use std::sync::Arc;

use justplay_assistant::ConversationOrchestrator;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct MusicNerRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// Ask the assistant to extract music entities from a free-text query
///
/// Body: `{"query": "..."}`; a null query counts as missing. Responds with
/// the assistant's raw text, which may be empty when the assistant produced no
/// text reply.
pub async fn music_ner(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult<String> {
    let assistant = state.config.assistant_config()?;

    let request: MusicNerRequest = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("Invalid request body".to_string()))?;

    let query = request
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Query not found in request body".to_string()))?;

    let orchestrator = ConversationOrchestrator::from_config(&assistant)?;
    let reply = orchestrator.ask(&query).await?;

    Ok(reply)
}
