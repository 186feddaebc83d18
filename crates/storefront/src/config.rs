//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `GREENTHUMB_HOST` - Bind address (default: 127.0.0.1)
//! - `GREENTHUMB_PORT` - Listen port (default: 3000)
//! - `GREENTHUMB_STATIC_DIR` - Static asset directory (default: crates/storefront/static)
//! - `GREENTHUMB_CATALOG_PATH` - JSON product catalog (default: built-in plant catalog)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use greenthumb_core::{Catalog, CatalogError};
use thiserror::Error;

const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Failed to read catalog {0}: {1}")]
    CatalogRead(PathBuf, std::io::Error),
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// JSON catalog to load instead of the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    pub sentry_sample_rate: f32,
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            catalog_path: None,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let env = Env { lookup };

        let host = env.parse_or("GREENTHUMB_HOST", defaults.host)?;
        let port = env.parse_or("GREENTHUMB_PORT", defaults.port)?;
        let static_dir = env
            .get_optional_env("GREENTHUMB_STATIC_DIR")
            .map_or(defaults.static_dir, PathBuf::from);
        let catalog_path = env
            .get_optional_env("GREENTHUMB_CATALOG_PATH")
            .map(PathBuf::from);
        let sentry_dsn = env.get_optional_env("SENTRY_DSN");
        let sentry_environment = env.get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = env.parse_or("SENTRY_SAMPLE_RATE", defaults.sentry_sample_rate)?;
        let sentry_traces_sample_rate =
            env.parse_or("SENTRY_TRACES_SAMPLE_RATE", defaults.sentry_traces_sample_rate)?;

        Ok(Self {
            host,
            port,
            static_dir,
            catalog_path,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Load the configured catalog, or the built-in one if none is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog file cannot be read or parsed.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::greenthumb());
        };
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::CatalogRead(path.clone(), e))?;
        Ok(Catalog::from_json(&json)?)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct Env<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> Env<F> {
    /// Get an optional variable, treating empty values as unset.
    fn get_optional_env(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|value| !value.trim().is_empty())
    }

    /// Parse a variable, falling back to `default` when unset.
    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.get_optional_env(key).map_or(Ok(default), |value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert!(config.catalog_path.is_none());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("GREENTHUMB_HOST", "0.0.0.0"),
            ("GREENTHUMB_PORT", "8080"),
            ("GREENTHUMB_STATIC_DIR", "/srv/static"),
            ("SENTRY_SAMPLE_RATE", "0.5"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert!((config.sentry_sample_rate - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("GREENTHUMB_PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "GREENTHUMB_PORT"));
    }

    #[test]
    fn test_empty_value_uses_default() {
        let config = load(&[("GREENTHUMB_PORT", "  ")]).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_builtin_catalog_when_unset() {
        let catalog = StorefrontConfig::default().load_catalog().unwrap();
        assert_eq!(catalog, Catalog::greenthumb());
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = StorefrontConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
            ..StorefrontConfig::default()
        };
        assert!(matches!(
            config.load_catalog(),
            Err(ConfigError::CatalogRead(_, _))
        ));
    }
}
