use anyhow::{Context, Result};

use crate::sequence::models::SequenceVariant;

/// Application configuration loaded from environment variables once at startup.
///
/// The API key is optional: without it the server still starts, and every
/// LLM-backed endpoint answers with a configuration error.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub sequence_variant: SequenceVariant,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY").or_else(|| optional_env("API_KEY")),
            sequence_variant: optional_env("EMAIL_SEQUENCE_VARIANT")
                .map(|v| v.parse::<SequenceVariant>())
                .transpose()
                .context("EMAIL_SEQUENCE_VARIANT must be 'compact' or 'reasoned'")?
                .unwrap_or_default(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a variable, treating unset and blank the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
