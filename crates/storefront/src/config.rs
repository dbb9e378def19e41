//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `KEEPANIME_BASE_URL` - Public URL for the storefront
//!
//! ## Optional
//! - `KEEPANIME_HOST` - Bind address (default: 127.0.0.1)
//! - `KEEPANIME_PORT` - Listen port (default: 3000)
//! - `KEEPANIME_DATA_DIR` - Root directory for client profile slots
//!   (default: ./data)
//! - `KEEPANIME_SEED` - Seed the catalog on startup when the store is
//!   empty (default: true)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Root directory for client profile slot files
    pub data_dir: PathBuf,
    /// Seed the catalog on startup when empty
    pub seed_on_startup: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl StorefrontConfig {
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

        let host = get_env_or_default("KEEPANIME_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("KEEPANIME_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("KEEPANIME_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("KEEPANIME_PORT".to_string(), e.to_string()))?;
        let base_url = get_required_env("KEEPANIME_BASE_URL")?;
        let data_dir = PathBuf::from(get_env_or_default("KEEPANIME_DATA_DIR", "./data"));
        let seed_on_startup = get_env_or_default("KEEPANIME_SEED", "true")
            .parse::<bool>()
            .map_err(|e| ConfigError::InvalidEnvVar("KEEPANIME_SEED".to_string(), e.to_string()))?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            seed_on_startup,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

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
