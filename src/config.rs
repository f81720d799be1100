use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::splitter::SplitOptions;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration, read from `threadsplit.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub split: SplitOptions,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Where and how the split history is kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            items_per_page: default_items_per_page(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_db_path() -> String {
    "threadsplit.db".to_string()
}

fn default_items_per_page() -> usize {
    5
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.split.validate()?;
        if self.history.items_per_page == 0 {
            return Err(ConfigError::Invalid(
                "items_per_page must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from a file, falling back to defaults when it is missing
pub fn load(path: &str) -> Result<Config, ConfigError> {
    let path = Path::new(path);
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    Config::from_toml(&content)
}
