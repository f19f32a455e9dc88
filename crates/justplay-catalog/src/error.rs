use crate::credential::CredentialError;
use justplay_http::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("Failed to build search URL: {0}")]
    InvalidUrl(String),

    #[error("Catalog search failed: {0}")]
    Search(#[source] ClientError),

    #[error("failed to create catalog client: {0}")]
    Client(#[source] ClientError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
