use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Serialize;
use std::fmt;

use super::anchor_document::KeyDigest;
use super::errors::{AnchorError, Result};
use super::{DigestType, DnsSecAlgorithm, calculate_key_tag, key_tag::dnskey_rdata};
use crate::dns::{DNSResourceClass, DNSResourceType, name_to_wire};

/// TTL the root zone publishes its DNSKEY and DS sets with
pub const ROOT_ANCHOR_TTL: u32 = 172800;

/// DNSKEY protocol field, always 3 (RFC 4034 §2.1.2)
pub const DNSSEC_PROTOCOL: u8 = 3;

/// Zone Key flag bit
pub const FLAG_ZONE_KEY: u16 = 0x0100;

/// Secure Entry Point flag bit
pub const FLAG_SEP: u16 = 0x0001;

/// A DS record projected from a trust anchor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DsRecord {
    pub zone: String,
    pub ttl: u32,
    pub rclass: DNSResourceClass,
    pub rtype: DNSResourceType,
    pub key_tag: u16,
    pub algorithm: u8,
    pub digest_type: u8,
    /// Hex digest as published
    pub digest: String,
}

impl DsRecord {
    pub fn from_key_digest(zone: &str, key_digest: &KeyDigest) -> Self {
        Self {
            zone: zone.to_string(),
            ttl: ROOT_ANCHOR_TTL,
            rclass: DNSResourceClass::IN,
            rtype: DNSResourceType::DS,
            key_tag: key_digest.key_tag,
            algorithm: key_digest.algorithm,
            digest_type: key_digest.digest_type,
            digest: key_digest.digest.clone(),
        }
    }

    pub fn digest_bytes(&self) -> Result<Vec<u8>> {
        hex::decode(&self.digest).map_err(|e| AnchorError::InvalidDigest {
            id: self.key_tag.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn algorithm_kind(&self) -> Option<DnsSecAlgorithm> {
        DnsSecAlgorithm::from_u8(self.algorithm)
    }

    pub fn digest_kind(&self) -> Option<DigestType> {
        DigestType::from_u8(self.digest_type)
    }

    /// Check that `dnskey` is the key this DS record commits to: same owner,
    /// key tag and algorithm, and a matching digest.
    pub fn matches(&self, dnskey: &DnskeyRecord) -> Result<bool> {
        if name_to_wire(&self.zone)? != name_to_wire(&dnskey.zone)?
            || self.algorithm != dnskey.algorithm
            || self.key_tag != dnskey.key_tag()?
        {
            return Ok(false);
        }

        let digest_type = self
            .digest_kind()
            .ok_or(AnchorError::UnsupportedDigestType(self.digest_type))?;
        let computed = dnskey.to_ds(digest_type)?;
        Ok(computed.digest.eq_ignore_ascii_case(&self.digest))
    }
}

impl fmt::Display for DsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {}",
            self.zone,
            self.ttl,
            self.rclass,
            self.rtype,
            self.key_tag,
            self.algorithm,
            self.digest_type,
            self.digest
        )
    }
}

/// A DNSKEY record, either projected from a trust anchor or supplied by a
/// caller for checking against the anchors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnskeyRecord {
    pub zone: String,
    pub ttl: u32,
    pub rclass: DNSResourceClass,
    pub rtype: DNSResourceType,
    pub flags: u16,
    pub protocol: u8,
    pub algorithm: u8,
    /// Base64 public key as published
    pub public_key: String,
}

impl DnskeyRecord {
    pub fn new(zone: &str, flags: u16, algorithm: u8, public_key: &str) -> Self {
        Self {
            zone: zone.to_string(),
            ttl: ROOT_ANCHOR_TTL,
            rclass: DNSResourceClass::IN,
            rtype: DNSResourceType::DNSKEY,
            flags,
            protocol: DNSSEC_PROTOCOL,
            algorithm,
            public_key: public_key.to_string(),
        }
    }

    /// Project a key digest that carries key material. DS-only anchors and
    /// entries without flags yield `None`.
    pub fn from_key_digest(zone: &str, key_digest: &KeyDigest) -> Option<Self> {
        let public_key = key_digest.public_key.as_deref().filter(|k| !k.is_empty())?;
        let flags = key_digest.flags?;
        Some(Self::new(zone, flags, key_digest.algorithm, public_key))
    }

    pub fn public_key_bytes(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.public_key)
            .map_err(|e| AnchorError::InvalidPublicKey {
                id: self.zone.clone(),
                reason: e.to_string(),
            })
    }

    /// Wire-format RDATA
    pub fn rdata(&self) -> Result<Vec<u8>> {
        Ok(dnskey_rdata(
            self.flags,
            self.protocol,
            self.algorithm,
            &self.public_key_bytes()?,
        ))
    }

    pub fn key_tag(&self) -> Result<u16> {
        Ok(calculate_key_tag(
            self.flags,
            self.protocol,
            self.algorithm,
            &self.public_key_bytes()?,
        ))
    }

    pub fn algorithm_kind(&self) -> Option<DnsSecAlgorithm> {
        DnsSecAlgorithm::from_u8(self.algorithm)
    }

    pub fn is_zone_key(&self) -> bool {
        self.flags & FLAG_ZONE_KEY != 0
    }

    pub fn is_sep(&self) -> bool {
        self.flags & FLAG_SEP != 0
    }

    /// Derive the DS record for this key (RFC 4034 §5.1.4): the digest covers
    /// the canonical owner name followed by the DNSKEY RDATA.
    pub fn to_ds(&self, digest_type: DigestType) -> Result<DsRecord> {
        let mut data = name_to_wire(&self.zone)?;
        data.extend_from_slice(&self.rdata()?);

        let digest = digest_type
            .digest(&data)
            .ok_or(AnchorError::UnsupportedDigestType(digest_type.to_u8()))?;

        Ok(DsRecord {
            zone: self.zone.clone(),
            ttl: self.ttl,
            rclass: self.rclass,
            rtype: DNSResourceType::DS,
            key_tag: self.key_tag()?,
            algorithm: self.algorithm,
            digest_type: digest_type.to_u8(),
            digest: hex::encode_upper(digest),
        })
    }
}

impl fmt::Display for DnskeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {}",
            self.zone,
            self.ttl,
            self.rclass,
            self.rtype,
            self.flags,
            self.protocol,
            self.algorithm,
            self.public_key
        )
    }
}
