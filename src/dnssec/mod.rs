pub mod algorithm;
pub mod anchor_document;
pub mod digest;
pub mod errors;
pub mod key_tag;
pub mod records;
pub mod trust_anchor;

pub use algorithm::DnsSecAlgorithm;
pub use anchor_document::{
    IANA_ROOT_ANCHORS_XML, KeyDigest, TrustAnchorDocument, parse_document, parse_timestamp,
};
pub use digest::DigestType;
pub use errors::{AnchorError, Result};
pub use key_tag::calculate_key_tag;
pub use records::{DnskeyRecord, DsRecord};
pub use trust_anchor::{TrustAnchorStore, is_valid, valid_dnskey_records, valid_ds_records};

/// DNSSEC constants
pub mod constants {
    /// Zone of the IANA root anchor set
    pub const ROOT_ZONE: &str = ".";

    /// Root trust anchor key tag (KSK-2017)
    pub const ROOT_KSK_2017_KEY_TAG: u16 = 20326;

    /// Root trust anchor key tag (KSK-2024)
    pub const ROOT_KSK_2024_KEY_TAG: u16 = 38696;

    pub use super::records::{DNSSEC_PROTOCOL, ROOT_ANCHOR_TTL};
}
