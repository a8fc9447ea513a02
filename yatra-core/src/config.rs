//! Application configuration for Yatra
//!
//! Feature crates carry their own config structs; this module holds the
//! settings shared across all of them plus the file/env loaders.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Settings for outbound HTTP clients (summary lookups, translation,
/// geocoding, generative text).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent sent to public services that require one (Nominatim).
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "yatra-travel-assistant".to_string(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YatraConfig {
    /// Directory containing the bundled data files (landmarks.json,
    /// recommend.csv, hotspots.csv, landmarks.csv).
    pub data_dir: String,
    pub log_level: String,
    pub http: HttpConfig,
    /// Free-form per-deployment overrides.
    pub custom: HashMap<String, serde_json::Value>,
}

impl Default for YatraConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            log_level: "info".to_string(),
            http: HttpConfig::default(),
            custom: HashMap::new(),
        }
    }
}

impl YatraConfig {
    /// Load configuration from a JSON or TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse configuration content, trying JSON first and TOML second.
    pub fn from_str(content: &str) -> Result<Self> {
        if let Ok(config) = serde_json::from_str::<YatraConfig>(content) {
            return Ok(config);
        }
        if let Ok(config) = toml::from_str::<YatraConfig>(content) {
            return Ok(config);
        }
        Err(Error::Configuration(
            "config is neither valid JSON nor valid TOML".to_string(),
        ))
    }

    /// Load overrides from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("YATRA_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Ok(level) = std::env::var("YATRA_LOG_LEVEL") {
            config.log_level = level;
        }
        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_dir.is_empty() {
            return Err(Error::Configuration("data_dir must not be empty".to_string()));
        }
        if self.http.timeout_secs == 0 {
            return Err(Error::Configuration(
                "http.timeout_secs must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_custom<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.custom
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}
