use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::dnssec::{TrustAnchorStore, parse_timestamp};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct AnchorConfig {
    /// Replacement root-anchors.xml (None = use the embedded IANA set)
    pub anchors_file: Option<PathBuf>,

    /// Fixed point in time to evaluate anchors at (None = wall clock)
    pub evaluation_time: Option<DateTime<Utc>>,

    /// Log filter directive used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            anchors_file: None,
            evaluation_time: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl AnchorConfig {
    /// Create an AnchorConfig from environment variables
    /// Returns Err if a variable is set but invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("ROOT_ANCHORS_FILE") {
            if !path.trim().is_empty() {
                config.anchors_file = Some(PathBuf::from(path));
            }
        }

        if let Ok(at) = std::env::var("ROOT_ANCHORS_AT") {
            config.evaluation_time = Some(parse_evaluation_time(&at)?);
        }

        if let Ok(filter) = std::env::var("ROOT_ANCHORS_LOG") {
            config.log_filter = filter;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.anchors_file {
            if !path.is_file() {
                return Err(ConfigError::AnchorsFileNotFound(
                    path.display().to_string(),
                ));
            }
        }

        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidLogFilter(
                "Log filter must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The time anchors are evaluated at
    pub fn evaluation_time(&self) -> DateTime<Utc> {
        self.evaluation_time.unwrap_or_else(Utc::now)
    }

    /// Build the trust anchor store this configuration selects
    pub fn load_store(&self) -> Result<TrustAnchorStore, ConfigError> {
        let store = match &self.anchors_file {
            Some(path) => TrustAnchorStore::from_file(path)?,
            None => TrustAnchorStore::new()?,
        };
        Ok(store)
    }
}

/// Parse a user-supplied RFC 3339 evaluation time
pub fn parse_evaluation_time(text: &str) -> Result<DateTime<Utc>, ConfigError> {
    parse_timestamp(text).ok_or_else(|| ConfigError::InvalidTimestamp(text.to_string()))
}
