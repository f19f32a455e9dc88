pub mod client;
pub mod credential;
pub mod dto;
pub mod error;
pub mod track;

pub use client::{CatalogClient, CatalogConfig};
pub use credential::{mint, CatalogCredentials, CredentialError, DeveloperTokenClaims, SignedCredential};
pub use dto::CatalogSearchResponse;
pub use error::CatalogError;
pub use track::{map_search_response, Track};
