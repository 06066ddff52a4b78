//! Configuration module for Filedrop.

use serde::Deserialize;
use std::path::Path;

use crate::{FiledropError, Result};

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// File storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory for stored files.
    #[serde(default = "default_location")]
    pub location: String,
    /// Wipe and recreate the root directory when the server starts.
    #[serde(default = "default_clear_on_startup")]
    pub clear_on_startup: bool,
    /// Maximum upload size in megabytes.
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_mb: u64,
}

fn default_location() -> String {
    "upload-dir".to_string()
}

fn default_clear_on_startup() -> bool {
    true
}

fn default_max_upload_size() -> u64 {
    1
}

impl StorageConfig {
    /// Create a storage configuration for the given root directory.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Default::default()
        }
    }

    /// Maximum upload size in bytes.
    pub fn max_upload_size_bytes(&self) -> usize {
        (self.max_upload_size_mb * 1024 * 1024) as usize
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            clear_on_startup: default_clear_on_startup(),
            max_upload_size_mb: default_max_upload_size(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty disables file logging.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/filedrop.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// File storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(FiledropError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| FiledropError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `FILEDROP_STORAGE_LOCATION`: Override the storage root directory
    /// - `FILEDROP_PORT`: Override the listen port
    pub fn apply_env_overrides(&mut self) {
        if let Ok(location) = std::env::var("FILEDROP_STORAGE_LOCATION") {
            if !location.is_empty() {
                self.storage.location = location;
            }
        }

        if let Ok(port) = std::env::var("FILEDROP_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) if port.is_empty() => {}
                Err(_) => tracing::warn!("Ignoring invalid FILEDROP_PORT value: {}", port),
            }
        }
    }

    /// Validate the configuration.
    ///
    /// An empty storage location is rejected later by the storage service itself.
    pub fn validate(&self) -> Result<()> {
        if self.storage.max_upload_size_mb == 0 {
            return Err(FiledropError::Config(
                "max_upload_size_mb must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
