use crate::credential::CatalogCredentials;
use crate::dto::CatalogSearchResponse;
use crate::error::{CatalogError, Result};
use crate::track::{map_search_response, Track};
use justplay_http::{ApiClient, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.music.apple.com/v1";
pub const DEFAULT_STOREFRONT: &str = "us";
pub const DEFAULT_SEARCH_TYPES: &str = "songs";
pub const DEFAULT_SEARCH_LIMIT: u32 = 5;

/// Catalog endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub base_url: String,
    pub storefront: String,
    pub search_types: String,
    pub search_limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            storefront: DEFAULT_STOREFRONT.to_string(),
            search_types: DEFAULT_SEARCH_TYPES.to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            request_timeout: None,
        }
    }
}

impl CatalogConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_storefront(mut self, storefront: impl Into<String>) -> Self {
        self.storefront = storefront.into();
        self
    }

    fn search_url(&self, term: &str) -> Result<Url> {
        let endpoint = format!("{}/catalog/{}/search", self.base_url, self.storefront);
        let limit = self.search_limit.to_string();

        Url::parse_with_params(
            &endpoint,
            [
                ("term", term),
                ("types", self.search_types.as_str()),
                ("limit", limit.as_str()),
            ],
        )
        .map_err(|e| CatalogError::InvalidUrl(e.to_string()))
    }
}

/// Catalog search client.
///
/// Every search mints a fresh developer token; tokens are never cached.
pub struct CatalogClient {
    api: ApiClient,
    config: CatalogConfig,
    credentials: CatalogCredentials,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig, credentials: CatalogCredentials) -> Result<Self> {
        let api = ApiClient::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(CatalogError::Client)?;

        Ok(Self {
            api,
            config,
            credentials,
        })
    }

    /// Search songs matching `term`, in the catalog's relevance order
    #[tracing::instrument(name = "catalog.search", skip(self), fields(storefront = %self.config.storefront))]
    pub async fn search(&self, term: &str) -> Result<Vec<Track>> {
        let credential = self.credentials.mint_now()?;
        let url = self.config.search_url(term)?;

        let response: CatalogSearchResponse = self
            .api
            .get_json(url.as_str(), credential.as_str())
            .await
            .map_err(CatalogError::Search)?;

        let tracks = map_search_response(response);
        tracing::info!(results = tracks.len(), "Catalog search complete");

        Ok(tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_term() {
        let url = CatalogConfig::default().search_url("daft punk & co").unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.music.apple.com/v1/catalog/us/search?term=daft+punk+%26+co&types=songs&limit=5"
        );
    }

    #[test]
    fn test_storefront_is_configurable() {
        let url = CatalogConfig::default()
            .with_storefront("gb")
            .search_url("x")
            .unwrap();

        assert_eq!(url.path(), "/v1/catalog/gb/search");
    }

    #[test]
    fn test_bad_base_url_is_reported() {
        let err = CatalogConfig::default()
            .with_base_url("not a url")
            .search_url("x")
            .unwrap_err();

        assert!(matches!(err, CatalogError::InvalidUrl(_)));
    }
}
