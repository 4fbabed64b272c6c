use std::fmt;

/// DNSSEC algorithm numbers as they appear in DS and DNSKEY records
/// (RFC 4034, 5155, 5702, 5933, 6605, 8080)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DnsSecAlgorithm {
    /// RSA/MD5 (deprecated)
    RsaMd5 = 1,
    /// DSA/SHA1 (RFC 2536)
    DSA = 3,
    /// RSA/SHA-1 (RFC 3110)
    RsaSha1 = 5,
    /// DSA-NSEC3-SHA1 (RFC 5155)
    DsaNsec3Sha1 = 6,
    /// RSASHA1-NSEC3-SHA1 (RFC 5155)
    RsaSha1Nsec3Sha1 = 7,
    /// RSA/SHA-256 (RFC 5702)
    RsaSha256 = 8,
    /// RSA/SHA-512 (RFC 5702)
    RsaSha512 = 10,
    /// GOST R 34.10-2001 (RFC 5933)
    EccGost = 12,
    /// ECDSA Curve P-256 with SHA-256 (RFC 6605)
    EcdsaP256Sha256 = 13,
    /// ECDSA Curve P-384 with SHA-384 (RFC 6605)
    EcdsaP384Sha384 = 14,
    /// Ed25519 (RFC 8080)
    Ed25519 = 15,
    /// Ed448 (RFC 8080)
    Ed448 = 16,
}

impl DnsSecAlgorithm {
    /// Look up an algorithm number. Unassigned and reserved numbers yield `None`.
    pub fn from_u8(value: u8) -> Option<Self> {
        let algorithm = match value {
            1 => Self::RsaMd5,
            3 => Self::DSA,
            5 => Self::RsaSha1,
            6 => Self::DsaNsec3Sha1,
            7 => Self::RsaSha1Nsec3Sha1,
            8 => Self::RsaSha256,
            10 => Self::RsaSha512,
            12 => Self::EccGost,
            13 => Self::EcdsaP256Sha256,
            14 => Self::EcdsaP384Sha384,
            15 => Self::Ed25519,
            16 => Self::Ed448,
            _ => return None,
        };
        Some(algorithm)
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Mnemonic used in zone files
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::RsaMd5 => "RSAMD5",
            Self::DSA => "DSA",
            Self::RsaSha1 => "RSASHA1",
            Self::DsaNsec3Sha1 => "DSA-NSEC3-SHA1",
            Self::RsaSha1Nsec3Sha1 => "RSASHA1-NSEC3-SHA1",
            Self::RsaSha256 => "RSASHA256",
            Self::RsaSha512 => "RSASHA512",
            Self::EccGost => "ECC-GOST",
            Self::EcdsaP256Sha256 => "ECDSAP256SHA256",
            Self::EcdsaP384Sha384 => "ECDSAP384SHA384",
            Self::Ed25519 => "ED25519",
            Self::Ed448 => "ED448",
        }
    }

    /// Algorithms validators MUST NOT use (RFC 8624 §3.1)
    pub fn is_deprecated(&self) -> bool {
        matches!(
            self,
            Self::RsaMd5 | Self::DSA | Self::DsaNsec3Sha1 | Self::EccGost
        )
    }

    /// Check if algorithm is recommended (RFC 8624)
    pub fn is_recommended(&self) -> bool {
        matches!(
            self,
            Self::RsaSha256 | Self::EcdsaP256Sha256 | Self::Ed25519
        )
    }
}

impl fmt::Display for DnsSecAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
