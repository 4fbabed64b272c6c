use crate::dnssec::AnchorError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Invalid evaluation time (expected RFC 3339): {0}")]
    InvalidTimestamp(String),

    #[error("Trust anchor file not found: {0}")]
    AnchorsFileNotFound(String),

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),

    #[error("Failed to load trust anchors: {0}")]
    Anchor(#[from] AnchorError),
}
