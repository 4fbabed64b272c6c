//! RFC 7958 trust anchor documents.
//!
//! The root anchor set is compiled into the binary from the IANA publication
//! at <https://data.iana.org/root-anchors/root-anchors.xml>. Refreshing it is a
//! matter of replacing `root-anchors.xml` next to this file when IANA
//! publishes a new set.

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, trace};

use super::DigestType;
use super::errors::{AnchorError, Result};

/// The IANA root zone trust anchor set, as published
pub const IANA_ROOT_ANCHORS_XML: &str = include_str!("root-anchors.xml");

/// A parsed `<TrustAnchor>` document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrustAnchorDocument {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@source", default)]
    pub source: String,
    /// Zone the anchors apply to ("." for the root)
    #[serde(rename = "Zone")]
    pub zone: String,
    /// Key digests in document order
    #[serde(rename = "KeyDigest", default)]
    pub key_digests: Vec<KeyDigest>,
}

/// One `<KeyDigest>` entry: a DS anchor, optionally carrying its DNSKEY
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyDigest {
    #[serde(rename = "@id", default)]
    pub id: String,
    /// RFC 3339 timestamp, kept as text so a bad value only disables this entry
    #[serde(rename = "@validFrom")]
    pub valid_from: String,
    #[serde(rename = "@validUntil", default)]
    pub valid_until: Option<String>,
    #[serde(rename = "KeyTag")]
    pub key_tag: u16,
    #[serde(rename = "Algorithm")]
    pub algorithm: u8,
    #[serde(rename = "DigestType")]
    pub digest_type: u8,
    /// Hex digest of the DNSKEY
    #[serde(rename = "Digest")]
    pub digest: String,
    /// Base64 public key
    #[serde(rename = "PublicKey", default)]
    pub public_key: Option<String>,
    #[serde(rename = "Flags", default)]
    pub flags: Option<u16>,
}

/// Parse the embedded IANA root anchor set.
///
/// The embedded data is under our control, so a malformed document is a
/// build defect and is reported as an error instead of degrading to an empty
/// anchor set.
pub fn parse_document() -> Result<TrustAnchorDocument> {
    TrustAnchorDocument::from_xml(IANA_ROOT_ANCHORS_XML)
}

impl TrustAnchorDocument {
    /// Parse an RFC 7958 document.
    ///
    /// Beyond well-formedness this checks that the zone is non-empty, every
    /// digest is hex of the length its digest type implies, and every public
    /// key is base64. Timestamps are checked lazily by [`KeyDigest::is_valid`].
    pub fn from_xml(xml: &str) -> Result<Self> {
        let mut document: TrustAnchorDocument = quick_xml::de::from_str(xml)?;

        document.zone = document.zone.trim().to_string();
        if document.zone.is_empty() {
            return Err(AnchorError::EmptyZone);
        }

        for key_digest in &mut document.key_digests {
            key_digest.normalize()?;
        }

        debug!(
            "Parsed trust anchor document {} for zone {} with {} key digests",
            document.id,
            document.zone,
            document.key_digests.len()
        );

        Ok(document)
    }
}

impl KeyDigest {
    fn normalize(&mut self) -> Result<()> {
        self.digest = self.digest.trim().to_string();
        let digest = hex::decode(&self.digest).map_err(|e| AnchorError::InvalidDigest {
            id: self.id.clone(),
            reason: e.to_string(),
        })?;
        if let Some(digest_type) = DigestType::from_u8(self.digest_type) {
            if digest.len() != digest_type.digest_len() {
                return Err(AnchorError::InvalidDigest {
                    id: self.id.clone(),
                    reason: format!(
                        "{} digest must be {} bytes, got {}",
                        digest_type,
                        digest_type.digest_len(),
                        digest.len()
                    ),
                });
            }
        }

        // Published keys may be wrapped across lines
        self.public_key = self
            .public_key
            .take()
            .map(|key| key.split_ascii_whitespace().collect::<String>())
            .filter(|key| !key.is_empty());
        if let Some(key) = &self.public_key {
            STANDARD
                .decode(key)
                .map_err(|e| AnchorError::InvalidPublicKey {
                    id: self.id.clone(),
                    reason: e.to_string(),
                })?;
        }

        // An empty validUntil means the anchor has no expiry
        self.valid_until = self
            .valid_until
            .take()
            .filter(|until| !until.trim().is_empty());

        Ok(())
    }

    /// Start of the validity window, `None` if the timestamp is malformed
    pub fn valid_from(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.valid_from)
    }

    /// End of the validity window. The outer `None` means no expiry; the inner
    /// `None` means the timestamp is malformed.
    pub fn valid_until(&self) -> Option<Option<DateTime<Utc>>> {
        self.valid_until.as_deref().map(parse_timestamp)
    }

    /// Whether this anchor is authoritative at `now`.
    ///
    /// True iff `now` is strictly after `validFrom` and, when `validUntil` is
    /// set, strictly before it. Any malformed timestamp makes the anchor
    /// invalid.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        let Some(valid_from) = self.valid_from() else {
            debug!(
                "Key digest {} (tag {}) has malformed validFrom {:?}",
                self.id, self.key_tag, self.valid_from
            );
            return false;
        };

        if now <= valid_from {
            trace!("Key digest {} not yet valid at {}", self.id, now);
            return false;
        }

        match self.valid_until() {
            None => true,
            Some(Some(valid_until)) => {
                let valid = now < valid_until;
                if !valid {
                    trace!("Key digest {} expired at {}", self.id, valid_until);
                }
                valid
            }
            Some(None) => {
                debug!(
                    "Key digest {} (tag {}) has malformed validUntil {:?}",
                    self.id, self.key_tag, self.valid_until
                );
                false
            }
        }
    }

    /// Whether the entry carries DNSKEY material
    pub fn has_public_key(&self) -> bool {
        self.public_key.is_some()
    }
}

/// Parse an RFC 3339 timestamp with explicit offset into UTC
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
