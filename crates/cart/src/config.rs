//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPCART_STOCK_URL` - Base URL of the stock/catalog API
//!
//! ## Optional
//! - `SHOPCART_STOCK_TOKEN` - Bearer token for the stock API
//! - `SHOPCART_DATA_DIR` - Directory for durable cart snapshots (default: .shopcart)
//! - `SHOPCART_CART_KEY` - Namespaced key for the cart snapshot (default: shopcart:cart)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart application configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Stock/catalog API configuration
    pub stock: StockApiConfig,
    /// Directory holding durable cart snapshots
    pub data_dir: PathBuf,
    /// Namespaced key identifying the cart snapshot
    pub cart_key: String,
}

/// Stock API configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct StockApiConfig {
    /// Base URL of the stock/catalog API
    pub base_url: Url,
    /// Optional bearer token (server-side only)
    pub api_token: Option<SecretString>,
}

impl std::fmt::Debug for StockApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field(
                "api_token",
                &self.api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let stock = StockApiConfig::from_env()?;
        let data_dir = PathBuf::from(get_env_or_default("SHOPCART_DATA_DIR", ".shopcart"));
        let cart_key = get_env_or_default("SHOPCART_CART_KEY", "shopcart:cart");

        Ok(Self {
            stock,
            data_dir,
            cart_key,
        })
    }
}

impl StockApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let mut raw_url = get_required_env("SHOPCART_STOCK_URL")?;
        // Url::join treats a base without a trailing slash as a file path
        // and would drop its last segment.
        if !raw_url.ends_with('/') {
            raw_url.push('/');
        }
        let base_url = Url::parse(&raw_url).map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPCART_STOCK_URL".to_string(), e.to_string())
        })?;

        Ok(Self {
            base_url,
            api_token: get_optional_env("SHOPCART_STOCK_TOKEN").map(SecretString::from),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
