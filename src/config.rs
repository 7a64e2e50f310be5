//! Configuration module for userboard.
//!
//! Both binaries read the same TOML file; each uses the sections it needs.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::{Result, UserboardError};

/// Environment variable that overrides `directory.base_url`.
pub const DIRECTORY_URL_ENV: &str = "USERBOARD_DIRECTORY_URL";

/// User service listener and storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UserServiceConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_user_port")]
    pub port: u16,
    /// Path to the SQLite database holding the `users` table.
    #[serde(default = "default_user_db_path")]
    pub database_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_user_port() -> u16 {
    8081
}

fn default_user_db_path() -> String {
    "data/users.db".to_string()
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_user_port(),
            database_path: default_user_db_path(),
        }
    }
}

/// Board service listener and storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardServiceConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_board_port")]
    pub port: u16,
    /// Path to the SQLite database holding the `boards` table.
    #[serde(default = "default_board_db_path")]
    pub database_path: String,
}

fn default_board_port() -> u16 {
    8082
}

fn default_board_db_path() -> String {
    "data/boards.db".to_string()
}

impl Default for BoardServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_board_port(),
            database_path: default_board_db_path(),
        }
    }
}

/// Outbound user directory configuration (used by the board service).
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Base URL of the user service, e.g. `http://localhost:8081`.
    #[serde(default = "default_directory_url")]
    pub base_url: String,
    /// TCP connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Total timeout for one lookup request in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Deadline for a whole lookup in milliseconds, all batch requests included.
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,
    /// Maximum number of ids sent in one batch request.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

fn default_directory_url() -> String {
    "http://localhost:8081".to_string()
}

fn default_connect_timeout_ms() -> u64 {
    1_000
}

fn default_request_timeout_ms() -> u64 {
    3_000
}

fn default_lookup_timeout_ms() -> u64 {
    5_000
}

fn default_max_batch_size() -> usize {
    200
}

impl DirectoryConfig {
    /// Connect timeout as a `Duration`.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Whole-lookup deadline as a `Duration`.
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_directory_url(),
            connect_timeout_ms: default_connect_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            lookup_timeout_ms: default_lookup_timeout_ms(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for log files; each service writes `<service>.log` there.
    #[serde(default = "default_log_directory")]
    pub directory: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> String {
    "logs".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: default_log_directory(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// User service configuration.
    #[serde(default)]
    pub user_service: UserServiceConfig,
    /// Board service configuration.
    #[serde(default)]
    pub board_service: BoardServiceConfig,
    /// User directory client configuration.
    #[serde(default)]
    pub directory: DirectoryConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(UserboardError::Io)?;
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
        toml::from_str(s).map_err(|e| UserboardError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `USERBOARD_DIRECTORY_URL`: base URL of the user service
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(DIRECTORY_URL_ENV) {
            if !url.is_empty() {
                self.directory.base_url = url;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - the directory base URL is not an absolute http(s) URL
    /// - a directory timeout or the batch size is zero
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.directory.base_url).map_err(|e| {
            UserboardError::Config(format!(
                "invalid directory.base_url '{}': {e}",
                self.directory.base_url
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(UserboardError::Config(format!(
                "directory.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.directory.connect_timeout_ms == 0
            || self.directory.request_timeout_ms == 0
            || self.directory.lookup_timeout_ms == 0
        {
            return Err(UserboardError::Config(
                "directory timeouts must be greater than zero".to_string(),
            ));
        }
        if self.directory.max_batch_size == 0 {
            return Err(UserboardError::Config(
                "directory.max_batch_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
