//! # Developer tokens
//!
//! Short-lived ES256 JWTs used as bearer credentials against the catalog API.
//! The key identifier travels in the token header so the catalog can pick
//! the matching verification key; the team identifier is the issuer claim.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Fixed validity of every minted token
pub const TOKEN_TTL_SECS: i64 = 3600;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Failed to parse private key: {0}")]
    KeyParse(#[source] jsonwebtoken::errors::Error),

    #[error("Failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Claims carried by a developer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperTokenClaims {
    /// Team identifier
    pub iss: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// A minted token. Immutable; used once as a bearer credential.
#[derive(Debug, Clone)]
pub struct SignedCredential {
    token: String,
    key_id: String,
    claims: DeveloperTokenClaims,
}

impl SignedCredential {
    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn claims(&self) -> &DeveloperTokenClaims {
        &self.claims
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.claims.exp, 0).single()
    }

    pub fn into_token(self) -> String {
        self.token
    }
}

/// Mint a developer token valid for one hour from `now`.
///
/// `private_key_pem` must be a PKCS#8 P-256 key (the `.p8` file format).
pub fn mint(
    issuer: &str,
    key_id: &str,
    private_key_pem: &str,
    now: DateTime<Utc>,
) -> Result<SignedCredential, CredentialError> {
    let encoding_key =
        EncodingKey::from_ec_pem(private_key_pem.as_bytes()).map_err(CredentialError::KeyParse)?;

    let expiry = now + Duration::seconds(TOKEN_TTL_SECS);
    let claims = DeveloperTokenClaims {
        iss: issuer.to_string(),
        iat: now.timestamp(),
        exp: expiry.timestamp(),
    };

    let mut header = Header::new(Algorithm::ES256);
    header.kid = Some(key_id.to_string());

    let token = encode(&header, &claims, &encoding_key).map_err(CredentialError::Signing)?;

    debug!(
        key_id = %key_id,
        expiry_timestamp = claims.exp,
        token_length = token.len(),
        "Developer token minted"
    );

    Ok(SignedCredential {
        token,
        key_id: key_id.to_string(),
        claims,
    })
}

/// Signing material for the catalog backend
#[derive(Clone)]
pub struct CatalogCredentials {
    pub team_id: String,
    pub key_id: String,
    pub private_key: String,
}

impl std::fmt::Debug for CatalogCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogCredentials")
            .field("team_id", &self.team_id)
            .field("key_id", &self.key_id)
            .field("has_private_key", &!self.private_key.is_empty())
            .finish()
    }
}

impl CatalogCredentials {
    pub fn new(
        team_id: impl Into<String>,
        key_id: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            team_id: team_id.into(),
            key_id: key_id.into(),
            private_key: private_key.into(),
        }
    }

    pub fn mint_at(&self, now: DateTime<Utc>) -> Result<SignedCredential, CredentialError> {
        mint(&self.team_id, &self.key_id, &self.private_key, now)
    }

    pub fn mint_now(&self) -> Result<SignedCredential, CredentialError> {
        self.mint_at(Utc::now())
    }
}
