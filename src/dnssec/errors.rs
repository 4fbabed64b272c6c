use std::sync::Arc;
use thiserror::Error;

/// Errors raised while loading trust anchors or checking keys against them
#[derive(Debug, Clone, Error)]
pub enum AnchorError {
    /// The anchor document is not well-formed XML or misses required elements
    #[error("Trust anchor document parse error: {0}")]
    Xml(String),

    #[error("IO error: {0}")]
    Io(Arc<std::io::Error>),

    /// The document names no zone
    #[error("Trust anchor document has an empty Zone")]
    EmptyZone,

    #[error("Invalid digest for key digest {id}: {reason}")]
    InvalidDigest { id: String, reason: String },

    #[error("Invalid public key for key digest {id}: {reason}")]
    InvalidPublicKey { id: String, reason: String },

    #[error("Invalid domain name: {0}")]
    InvalidName(String),

    #[error("Trust anchor not found for key tag {0}")]
    TrustAnchorNotFound(u16),

    #[error("Unsupported digest type: {0}")]
    UnsupportedDigestType(u8),

    #[error("DNSKEY algorithm {found} does not match anchor algorithm {expected} for key tag {key_tag}")]
    AlgorithmMismatch {
        key_tag: u16,
        expected: u8,
        found: u8,
    },

    #[error("DS record digest does not match DNSKEY for key tag {0}")]
    DsDigestMismatch(u16),
}

impl From<std::io::Error> for AnchorError {
    fn from(err: std::io::Error) -> Self {
        AnchorError::Io(Arc::new(err))
    }
}

impl From<quick_xml::de::DeError> for AnchorError {
    fn from(err: quick_xml::de::DeError) -> Self {
        AnchorError::Xml(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnchorError>;
