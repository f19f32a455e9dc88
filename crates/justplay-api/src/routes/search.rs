use axum::{
    body::Bytes,
    extract::{Query, State},
    http::Uri,
    Json,
};
use std::sync::Arc;

use justplay_catalog::{CatalogClient, Track};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

/// Search the music catalog
///
/// The term comes from the first `?term=`; when that is absent or empty the
/// raw request body is used instead. The query string is only read after the
/// credentials check and is never rejected.
pub async fn search(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    body: Bytes,
) -> ApiResult<Json<Vec<Track>>> {
    let credentials = state.config.catalog_credentials()?;

    let term = query_term(&uri)
        .filter(|t| !t.is_empty())
        .or_else(|| {
            let fallback = String::from_utf8_lossy(&body).trim().to_string();
            (!fallback.is_empty()).then_some(fallback)
        })
        .ok_or_else(|| ApiError::BadRequest("Search term not found in request".to_string()))?;

    let client = CatalogClient::new(state.config.catalog_config(), credentials)?;
    let tracks = client.search(&term).await?;

    Ok(Json(tracks))
}

/// First `term` parameter of the query string, if any
fn query_term(uri: &Uri) -> Option<String> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;

    pairs
        .into_iter()
        .find(|(key, _)| key == "term")
        .map(|(_, value)| value)
}
