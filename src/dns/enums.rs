use serde::Serialize;
use std::fmt;

/// Record types carried by trust anchor projections
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DNSResourceType {
    DS,
    DNSKEY,
}

impl DNSResourceType {
    /// Create from the numeric type code
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            43 => Some(DNSResourceType::DS),
            48 => Some(DNSResourceType::DNSKEY),
            _ => None,
        }
    }

    pub fn to_u16(self) -> u16 {
        self.into()
    }
}

impl From<DNSResourceType> for u16 {
    fn from(value: DNSResourceType) -> Self {
        match value {
            DNSResourceType::DS => 43,
            DNSResourceType::DNSKEY => 48,
        }
    }
}

impl fmt::Display for DNSResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DNSResourceType::DS => write!(f, "DS"),
            DNSResourceType::DNSKEY => write!(f, "DNSKEY"),
        }
    }
}

/// Record class of trust anchor projections. DNSSEC anchors only exist in
/// the Internet class.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum DNSResourceClass {
    #[default]
    IN,
}

impl DNSResourceClass {
    /// Create from the numeric class code; other classes are not representable
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(DNSResourceClass::IN),
            _ => None,
        }
    }

    pub fn to_u16(self) -> u16 {
        self.into()
    }
}

impl From<DNSResourceClass> for u16 {
    fn from(value: DNSResourceClass) -> Self {
        match value {
            DNSResourceClass::IN => 1,
        }
    }
}

impl fmt::Display for DNSResourceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DNSResourceClass::IN => write!(f, "IN"),
        }
    }
}
