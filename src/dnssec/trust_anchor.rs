use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, trace, warn};

use super::anchor_document::{KeyDigest, TrustAnchorDocument, parse_document};
use super::errors::{AnchorError, Result};
use super::records::{DnskeyRecord, DsRecord};

/// Whether `record` is authoritative at `now`; see [`KeyDigest::is_valid`]
pub fn is_valid(record: &KeyDigest, now: DateTime<Utc>) -> bool {
    record.is_valid(now)
}

/// Valid DS anchors from the embedded root anchor set, keyed by key tag.
///
/// Parses the embedded document on every call. Hold a [`TrustAnchorStore`]
/// to parse once.
pub fn valid_ds_records(now: DateTime<Utc>) -> Result<HashMap<u16, DsRecord>> {
    Ok(TrustAnchorStore::new()?.valid_ds_records(now))
}

/// Valid DNSKEY anchors from the embedded root anchor set, keyed by key tag
pub fn valid_dnskey_records(now: DateTime<Utc>) -> Result<HashMap<u16, DnskeyRecord>> {
    Ok(TrustAnchorStore::new()?.valid_dnskey_records(now))
}

/// Immutable store over one trust anchor document
///
/// The document is parsed once at construction. Every query derives fresh
/// records from it for the supplied point in time, so a store can be shared
/// across threads without coordination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustAnchorStore {
    document: TrustAnchorDocument,
}

impl TrustAnchorStore {
    /// Create a store over the embedded IANA root anchors
    pub fn new() -> Result<Self> {
        Ok(Self::from_document(parse_document()?))
    }

    /// Create a store from an RFC 7958 document
    pub fn from_xml(xml: &str) -> Result<Self> {
        Ok(Self::from_document(TrustAnchorDocument::from_xml(xml)?))
    }

    /// Create a store from a refreshed root-anchors.xml on disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading trust anchors from {}", path.display());
        let xml = std::fs::read_to_string(path)?;
        Self::from_xml(&xml)
    }

    pub fn from_document(document: TrustAnchorDocument) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &TrustAnchorDocument {
        &self.document
    }

    pub fn zone(&self) -> &str {
        &self.document.zone
    }

    /// Key digests valid at `now`, in document order
    pub fn valid_key_digests(&self, now: DateTime<Utc>) -> impl Iterator<Item = &KeyDigest> + '_ {
        self.document
            .key_digests
            .iter()
            .filter(move |kd| kd.is_valid(now))
    }

    /// DS anchors valid at `now`, keyed by key tag.
    ///
    /// If two valid entries share a key tag the later one in document order
    /// wins.
    pub fn valid_ds_records(&self, now: DateTime<Utc>) -> HashMap<u16, DsRecord> {
        let mut records = HashMap::new();
        for key_digest in self.valid_key_digests(now) {
            let ds = DsRecord::from_key_digest(self.zone(), key_digest);
            trace!("Valid DS anchor: {}", ds);
            if records.insert(key_digest.key_tag, ds).is_some() {
                warn!(
                    "Duplicate valid trust anchor for key tag {}, keeping {}",
                    key_digest.key_tag, key_digest.id
                );
            }
        }
        debug!("{} valid DS anchors at {}", records.len(), now);
        records
    }

    /// DNSKEY anchors valid at `now`, keyed by key tag. Entries without key
    /// material are DS-only and skipped.
    pub fn valid_dnskey_records(&self, now: DateTime<Utc>) -> HashMap<u16, DnskeyRecord> {
        let mut records = HashMap::new();
        for key_digest in self.valid_key_digests(now) {
            if !key_digest.has_public_key() {
                trace!("Key digest {} is DS-only", key_digest.id);
                continue;
            }
            let Some(dnskey) = DnskeyRecord::from_key_digest(self.zone(), key_digest) else {
                warn!(
                    "Key digest {} (tag {}) has a public key but no flags",
                    key_digest.id, key_digest.key_tag
                );
                continue;
            };
            if records.insert(key_digest.key_tag, dnskey).is_some() {
                warn!(
                    "Duplicate valid trust anchor for key tag {}, keeping {}",
                    key_digest.key_tag, key_digest.id
                );
            }
        }
        debug!("{} valid DNSKEY anchors at {}", records.len(), now);
        records
    }

    /// Find the DS anchor for `key_tag` valid at `now`
    pub fn find_ds(&self, key_tag: u16, now: DateTime<Utc>) -> Option<DsRecord> {
        self.valid_key_digests(now)
            .filter(|kd| kd.key_tag == key_tag)
            .last()
            .map(|kd| DsRecord::from_key_digest(self.zone(), kd))
    }

    /// Check a DNSKEY (typically fetched from the live root zone) against the
    /// anchors valid at `now`. Returns the key tag of the matching anchor.
    pub fn verify_dnskey(&self, dnskey: &DnskeyRecord, now: DateTime<Utc>) -> Result<u16> {
        let key_tag = dnskey.key_tag()?;
        let ds = self
            .find_ds(key_tag, now)
            .ok_or(AnchorError::TrustAnchorNotFound(key_tag))?;

        if ds.algorithm != dnskey.algorithm {
            return Err(AnchorError::AlgorithmMismatch {
                key_tag,
                expected: ds.algorithm,
                found: dnskey.algorithm,
            });
        }

        let digest_type = ds
            .digest_kind()
            .ok_or(AnchorError::UnsupportedDigestType(ds.digest_type))?;
        let computed = dnskey.to_ds(digest_type)?;
        trace!(
            "Authentic digest {}, computed digest {}",
            ds.digest, computed.digest
        );

        if !computed.digest.eq_ignore_ascii_case(&ds.digest) {
            return Err(AnchorError::DsDigestMismatch(key_tag));
        }

        debug!("DNSKEY with key tag {} matches trust anchor", key_tag);
        Ok(key_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dnssec::anchor_document::parse_timestamp;

    fn ts(text: &str) -> DateTime<Utc> {
        parse_timestamp(text).unwrap()
    }

    const OVERLAP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TrustAnchor id="test" source="test">
<Zone>.</Zone>
<KeyDigest id="first" validFrom="2020-01-01T00:00:00+00:00">
<KeyTag>100</KeyTag>
<Algorithm>8</Algorithm>
<DigestType>2</DigestType>
<Digest>1111111111111111111111111111111111111111111111111111111111111111</Digest>
</KeyDigest>
<KeyDigest id="second" validFrom="2021-01-01T00:00:00+00:00">
<KeyTag>100</KeyTag>
<Algorithm>8</Algorithm>
<DigestType>2</DigestType>
<Digest>2222222222222222222222222222222222222222222222222222222222222222</Digest>
</KeyDigest>
</TrustAnchor>"#;

    #[test]
    fn test_duplicate_key_tag_last_wins() {
        let store = TrustAnchorStore::from_xml(OVERLAP_XML).unwrap();

        let records = store.valid_ds_records(ts("2022-01-01T00:00:00Z"));
        assert_eq!(records.len(), 1);
        assert!(records[&100].digest.starts_with("2222"));

        // Only the first entry is valid before 2021
        let records = store.valid_ds_records(ts("2020-06-01T00:00:00Z"));
        assert!(records[&100].digest.starts_with("1111"));
    }

    #[test]
    fn test_find_ds_agrees_with_map() {
        let store = TrustAnchorStore::from_xml(OVERLAP_XML).unwrap();
        let now = ts("2022-01-01T00:00:00Z");
        assert_eq!(
            store.find_ds(100, now),
            store.valid_ds_records(now).remove(&100)
        );
        assert_eq!(store.find_ds(101, now), None);
    }

    #[test]
    fn test_rollover_overlap() {
        let store = TrustAnchorStore::new().unwrap();

        let mut tags: Vec<u16> = store
            .valid_ds_records(ts("2018-06-01T00:00:00Z"))
            .into_keys()
            .collect();
        tags.sort_unstable();
        assert_eq!(tags, vec![19036, 20326]);

        let mut tags: Vec<u16> = store
            .valid_ds_records(ts("2025-01-01T00:00:00Z"))
            .into_keys()
            .collect();
        tags.sort_unstable();
        assert_eq!(tags, vec![20326, 38696]);
    }

    #[test]
    fn test_nothing_valid_before_first_anchor() {
        let store = TrustAnchorStore::new().unwrap();
        let now = ts("2000-01-01T00:00:00Z");
        assert!(store.valid_ds_records(now).is_empty());
        assert!(store.valid_dnskey_records(now).is_empty());
    }

    #[test]
    fn test_verify_live_root_key() {
        let store = TrustAnchorStore::new().unwrap();
        let now = ts("2025-01-01T00:00:00Z");
        let dnskey = store.valid_dnskey_records(now).remove(&20326).unwrap();
        assert_eq!(store.verify_dnskey(&dnskey, now).unwrap(), 20326);
    }

    #[test]
    fn test_verify_rejects_expired_anchor() {
        let store = TrustAnchorStore::new().unwrap();
        let old = store
            .valid_dnskey_records(ts("2015-01-01T00:00:00Z"))
            .remove(&19036)
            .unwrap();

        let result = store.verify_dnskey(&old, ts("2025-01-01T00:00:00Z"));
        assert!(matches!(result, Err(AnchorError::TrustAnchorNotFound(19036))));
    }
}
