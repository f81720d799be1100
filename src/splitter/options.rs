use serde::{Deserialize, Serialize};

use super::{DEFAULT_ESTIMATE_DIVISOR, DEFAULT_MAX_LEN, DEFAULT_SOFT_FLUSH, SPLIT_MARKER};
use crate::config::ConfigError;

/// Tunable limits for a split operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitOptions {
    /// Hard ceiling for a finished chunk, suffix included
    #[serde(default = "default_max_len")]
    pub max_len: usize,
    /// Accumulated length at which a chunk is finalized early
    #[serde(default = "default_soft_flush")]
    pub soft_flush: usize,
    /// Divisor used to forecast the chunk count from the input length
    #[serde(default = "default_estimate_divisor")]
    pub estimate_divisor: usize,
    /// Literal marker separating independently split sections
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Number of input characters kept in a history preview
    #[serde(default = "default_preview_len")]
    pub preview_len: usize,
}

fn default_max_len() -> usize {
    DEFAULT_MAX_LEN
}

fn default_soft_flush() -> usize {
    DEFAULT_SOFT_FLUSH
}

fn default_estimate_divisor() -> usize {
    DEFAULT_ESTIMATE_DIVISOR
}

fn default_delimiter() -> String {
    SPLIT_MARKER.to_string()
}

fn default_preview_len() -> usize {
    100
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            max_len: default_max_len(),
            soft_flush: default_soft_flush(),
            estimate_divisor: default_estimate_divisor(),
            delimiter: default_delimiter(),
            preview_len: default_preview_len(),
        }
    }
}

impl SplitOptions {
    /// Set the hard chunk ceiling
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Set the soft flush threshold
    pub fn soft_flush(mut self, soft_flush: usize) -> Self {
        self.soft_flush = soft_flush;
        self
    }

    /// Set the section delimiter
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Check that the limits describe a usable configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_len == 0 {
            return Err(ConfigError::Invalid("max_len must be positive".into()));
        }
        if self.soft_flush == 0 || self.soft_flush > self.max_len {
            return Err(ConfigError::Invalid(format!(
                "soft_flush must be in 1..={}, got {}",
                self.max_len, self.soft_flush
            )));
        }
        if self.estimate_divisor == 0 {
            return Err(ConfigError::Invalid(
                "estimate_divisor must be positive".into(),
            ));
        }
        if self.delimiter.is_empty() {
            return Err(ConfigError::Invalid("delimiter must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod options_tests {
    use super::*;

    #[test]
    fn test_defaults_match_platform_limits() {
        let options = SplitOptions::default();
        assert_eq!(options.max_len, 280);
        assert_eq!(options.soft_flush, 200);
        assert_eq!(options.estimate_divisor, 200);
        assert_eq!(options.delimiter, "[SPLIT]");
        assert_eq!(options.preview_len, 100);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_soft_flush_above_ceiling_rejected() {
        let options = SplitOptions::default().soft_flush(300);
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("soft_flush"));
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let options = SplitOptions::default().delimiter("");
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_zero_ceiling_rejected() {
        let options = SplitOptions::default().max_len(0);
        assert!(options.validate().is_err());
    }
}
