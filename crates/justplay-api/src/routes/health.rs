use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: HashMap<String, String>,
}

/// Health check endpoint
///
/// Reports whether each backend has the secrets it needs. No outbound calls.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let mut services = HashMap::new();

    let assistant = if state.config.assistant_config().is_ok() {
        "configured"
    } else {
        "missing credentials"
    };
    services.insert("assistant".to_string(), assistant.to_string());

    let catalog = if state.config.catalog_credentials().is_ok() {
        "configured"
    } else {
        "missing credentials"
    };
    services.insert("catalog".to_string(), catalog.to_string());

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services,
    })
}
