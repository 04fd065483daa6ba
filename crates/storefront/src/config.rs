//! Catalog connection configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CATALOG_URL` - Base URL of the remote catalog (PostgREST-style API)
//! - `CATALOG_API_KEY` - API key sent as `apikey` and bearer token
//!
//! ## Optional
//! - `CATALOG_TIMEOUT_SECS` - Per-request timeout in seconds (default: 10)

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Default per-request timeout for catalog reads.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Remote catalog connection configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, without a trailing slash.
    pub base_url: String,
    /// API key for the read-only catalog role.
    pub api_key: SecretString,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing or the URL
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw_url = get_required_env("CATALOG_URL")?;
        // Validate early; a bad URL should fail at startup, not per request.
        Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_URL".to_string(), e.to_string()))?;
        let base_url = raw_url.trim_end_matches('/').to_string();

        let api_key = SecretString::from(get_required_env("CATALOG_API_KEY")?);

        let timeout_secs = match std::env::var("CATALOG_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            api_key,
            timeout_secs,
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = CatalogConfig {
            base_url: "https://catalog.example.com".to_string(),
            api_key: SecretString::from("very-secret-key"),
            timeout_secs: 10,
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("catalog.example.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("very-secret-key"));
    }
}
