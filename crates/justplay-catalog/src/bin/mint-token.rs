//! Print a fresh catalog developer token.
//!
//! Reads `APPLE_MUSIC_TEAM_ID`, `APPLE_MUSIC_KEY_ID` and either
//! `APPLE_MUSIC_PRIVATE_KEY` or a `.p8` file path given as the first argument.

use anyhow::{Context, Result};
use justplay_catalog::CatalogCredentials;
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .with_context(|| format!("{} environment variable is required", name))
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let team_id = required_env("APPLE_MUSIC_TEAM_ID")?;
    let key_id = required_env("APPLE_MUSIC_KEY_ID")?;
    let private_key = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read private key file {}", path))?,
        None => required_env("APPLE_MUSIC_PRIVATE_KEY")?,
    };

    let credential = CatalogCredentials::new(team_id, key_id, private_key)
        .mint_now()
        .context("Failed to mint developer token")?;

    if let Some(expires_at) = credential.expires_at() {
        eprintln!("Token for key {} valid until {}", credential.key_id(), expires_at);
    }
    println!("{}", credential.into_token());

    Ok(())
}
