use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use justplay_assistant::{config as assistant_defaults, AssistantConfig, PollPolicy};
use justplay_catalog::{client as catalog_defaults, CatalogConfig, CatalogCredentials};

use crate::error::ApiError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assistant: AssistantSection,
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    #[serde(skip)]
    pub secrets: Secrets,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistantSection {
    pub base_url: String,
    pub assistant_id: String,
    pub beta_header: String,
    pub poll_interval_ms: u64,
    /// Upper bound on time spent waiting for a run to finish
    pub max_wait_secs: u64,
}

impl Default for AssistantSection {
    fn default() -> Self {
        Self {
            base_url: assistant_defaults::DEFAULT_BASE_URL.to_string(),
            assistant_id: assistant_defaults::DEFAULT_ASSISTANT_ID.to_string(),
            beta_header: assistant_defaults::DEFAULT_BETA_HEADER.to_string(),
            poll_interval_ms: 1000,
            max_wait_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    pub base_url: String,
    pub storefront: String,
    pub search_types: String,
    pub search_limit: u32,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            base_url: catalog_defaults::DEFAULT_BASE_URL.to_string(),
            storefront: catalog_defaults::DEFAULT_STOREFRONT.to_string(),
            search_types: catalog_defaults::DEFAULT_SEARCH_TYPES.to_string(),
            search_limit: catalog_defaults::DEFAULT_SEARCH_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per outbound request; unset keeps the transport default
    pub request_timeout_secs: Option<u64>,
    /// Whole-invocation budget enforced by the router
    pub handler_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: None,
            handler_timeout_secs: 120,
        }
    }
}

impl HttpConfig {
    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Backend credentials. Optional at startup, required per request.
#[derive(Clone, Default)]
pub struct Secrets {
    pub openai_api_key: Option<String>,
    pub apple_music_private_key: Option<String>,
    pub apple_music_key_id: Option<String>,
    pub apple_music_team_id: Option<String>,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("openai_api_key", &self.openai_api_key.is_some())
            .field("apple_music_private_key", &self.apple_music_private_key.is_some())
            .field("apple_music_key_id", &self.apple_music_key_id.is_some())
            .field("apple_music_team_id", &self.apple_music_team_id.is_some())
            .finish()
    }
}

impl Secrets {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: non_empty_env("OPENAI_API_KEY"),
            apple_music_private_key: non_empty_env("APPLE_MUSIC_PRIVATE_KEY"),
            apple_music_key_id: non_empty_env("APPLE_MUSIC_KEY_ID"),
            apple_music_team_id: non_empty_env("APPLE_MUSIC_TEAM_ID"),
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. JUSTPLAY_<SECTION>__<KEY> environment variables
    ///
    /// Missing secrets do not fail the load; handlers reject requests that need them.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("JUSTPLAY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut cfg: Config = builder.build()?.try_deserialize()?;
        cfg.secrets = Secrets::from_env();

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        builder.build()?.try_deserialize()
    }

    /// Assistant settings, or a configuration error when the API key is missing
    pub fn assistant_config(&self) -> Result<AssistantConfig, ApiError> {
        let api_key = self
            .secrets
            .openai_api_key
            .clone()
            .ok_or_else(|| ApiError::Config("OPENAI_API_KEY environment variable not set".to_string()))?;

        let section = &self.assistant;
        Ok(AssistantConfig::new(api_key)
            .with_base_url(section.base_url.clone())
            .with_assistant_id(section.assistant_id.clone())
            .with_beta_header(section.beta_header.clone())
            .with_poll(PollPolicy::new(
                Duration::from_millis(section.poll_interval_ms),
                Duration::from_secs(section.max_wait_secs),
            ))
            .with_request_timeout(self.http.request_timeout()))
    }

    /// Catalog signing material, or a configuration error when any part is missing
    pub fn catalog_credentials(&self) -> Result<CatalogCredentials, ApiError> {
        match (
            &self.secrets.apple_music_team_id,
            &self.secrets.apple_music_key_id,
            &self.secrets.apple_music_private_key,
        ) {
            (Some(team_id), Some(key_id), Some(private_key)) => Ok(CatalogCredentials::new(
                team_id.clone(),
                key_id.clone(),
                private_key.clone(),
            )),
            _ => Err(ApiError::Config(
                "Missing Apple Music environment variables".to_string(),
            )),
        }
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        let section = &self.catalog;
        CatalogConfig {
            search_types: section.search_types.clone(),
            search_limit: section.search_limit,
            request_timeout: self.http.request_timeout(),
            ..CatalogConfig::default()
        }
        .with_base_url(section.base_url.clone())
        .with_storefront(section.storefront.clone())
    }
}
