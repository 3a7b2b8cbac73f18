//! Configuration file parser for the gateway's TOML config.
//!
//! The config file is optional — a missing file yields `Config::default()`.
//! Unknown keys are ignored by serde, though we log a warning when the file
//! contains potential typos. CLI flags are applied on top in `main`.
use crate::graphql::QueryLimits;
use crate::hn::{DEFAULT_BASE_URL, DEFAULT_MAX_RESPONSE_BYTES};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),

    #[error("Invalid config value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Top-level gateway configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the GraphQL endpoint listens on.
    pub listen: SocketAddr,

    /// Root of the upstream REST API.
    pub base_url: String,

    /// Timeout applied to each upstream GET, in seconds.
    pub request_timeout_secs: u64,

    /// Upstream bodies larger than this are rejected.
    pub max_response_bytes: usize,

    pub max_query_depth: usize,

    pub max_query_complexity: usize,

    /// Serve the GraphiQL IDE on `GET /graphql`.
    pub graphiql: bool,
}

impl Default for Config {
    fn default() -> Self {
        let limits = QueryLimits::default();
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 4000)),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 10,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            max_query_depth: limits.max_depth,
            max_query_complexity: limits.max_complexity,
            graphiql: true,
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 7] = [
        "listen",
        "base_url",
        "request_timeout_secs",
        "max_response_bytes",
        "max_query_depth",
        "max_query_complexity",
        "graphiql",
    ];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    /// - Zero timeout or limits → `Err(ConfigError::Invalid)`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Race condition: file deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::info!(
            path = %path.display(),
            listen = %config.listen,
            base_url = %config.base_url,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Rejects values that would make every request fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let zero = |key: &'static str| ConfigError::Invalid {
            key,
            reason: "must be greater than zero".to_string(),
        };
        if self.request_timeout_secs == 0 {
            return Err(zero("request_timeout_secs"));
        }
        if self.max_response_bytes == 0 {
            return Err(zero("max_response_bytes"));
        }
        if self.max_query_depth == 0 {
            return Err(zero("max_query_depth"));
        }
        if self.max_query_complexity == 0 {
            return Err(zero("max_query_complexity"));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn query_limits(&self) -> QueryLimits {
        QueryLimits {
            max_depth: self.max_query_depth,
            max_complexity: self.max_query_complexity,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
