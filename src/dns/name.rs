use crate::dnssec::errors::{AnchorError, Result};

/// Maximum length of a single label (RFC 1035 §2.3.4)
const MAX_LABEL_LEN: usize = 63;

/// Maximum length of a name in wire format (RFC 1035 §2.3.4)
const MAX_NAME_LEN: usize = 255;

/// Encode a presentation-format domain name in canonical wire format
/// (RFC 4034 §6.2): uncompressed, lowercased, terminated by the root label.
///
/// Both `"example.com"` and `"example.com."` encode to the same bytes; `"."`
/// and `""` encode to the root name.
pub fn name_to_wire(name: &str) -> Result<Vec<u8>> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);

    let mut wire = Vec::with_capacity(trimmed.len() + 2);
    if !trimmed.is_empty() {
        for label in trimmed.split('.') {
            if label.is_empty() {
                return Err(AnchorError::InvalidName(format!("empty label in {}", name)));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(AnchorError::InvalidName(format!(
                    "label exceeds {} bytes in {}",
                    MAX_LABEL_LEN, name
                )));
            }
            wire.push(label.len() as u8);
            wire.extend(label.bytes().map(|b| b.to_ascii_lowercase()));
        }
    }
    wire.push(0);

    if wire.len() > MAX_NAME_LEN {
        return Err(AnchorError::InvalidName(format!(
            "name exceeds {} bytes: {}",
            MAX_NAME_LEN, name
        )));
    }

    Ok(wire)
}
