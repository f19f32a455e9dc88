pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{
    error_handling::HandleErrorLayer,
    routing::{get, post},
    BoxError, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::routes::{health, musicner, search};
use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    let handler_timeout = Duration::from_secs(state.config.http.handler_timeout_secs);

    let api_routes = Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Entity extraction
        .route("/musicner", post(musicner::music_ner))
        // Catalog
        .route("/search", get(search::search).post(search::search));

    Router::new()
        .merge(api_routes)
        .layer(axum::middleware::from_fn(middleware::logging::log_request))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    handle_layer_error(err, handler_timeout)
                }))
                .timeout(handler_timeout),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn handle_layer_error(err: BoxError, limit: Duration) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout(limit)
    } else {
        ApiError::Internal(err.to_string())
    }
}
