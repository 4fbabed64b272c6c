//! DNSSEC root zone trust anchors.
//!
//! Parses the IANA root anchor set (RFC 7958) and projects the anchors valid
//! at a given time into DS and DNSKEY records for validators to start their
//! chain of trust from.

pub mod config;
pub mod dns;
pub mod dnssec;
pub mod error;
pub mod report;

pub use dnssec::{
    DnskeyRecord, DsRecord, KeyDigest, TrustAnchorDocument, TrustAnchorStore, is_valid,
    parse_document, valid_dnskey_records, valid_ds_records,
};
