/// Serialize DNSKEY RDATA: flags (2) + protocol (1) + algorithm (1) + public key
pub fn dnskey_rdata(flags: u16, protocol: u8, algorithm: u8, public_key: &[u8]) -> Vec<u8> {
    let mut rdata = Vec::with_capacity(4 + public_key.len());
    rdata.extend_from_slice(&flags.to_be_bytes());
    rdata.push(protocol);
    rdata.push(algorithm);
    rdata.extend_from_slice(public_key);
    rdata
}

/// Calculate the key tag for a DNSKEY record (RFC 4034 Appendix B)
pub fn calculate_key_tag(flags: u16, protocol: u8, algorithm: u8, public_key: &[u8]) -> u16 {
    // RSAMD5 uses the low 16 bits of the modulus
    if algorithm == 1 {
        return match public_key {
            [.., hi, lo] => u16::from_be_bytes([*hi, *lo]),
            _ => 0,
        };
    }

    let rdata = dnskey_rdata(flags, protocol, algorithm, public_key);
    let mut accumulator: u32 = rdata
        .chunks(2)
        .map(|pair| match pair {
            [hi, lo] => (u32::from(*hi) << 8) + u32::from(*lo),
            [hi] => u32::from(*hi) << 8,
            _ => 0,
        })
        .sum();

    accumulator += accumulator >> 16;
    (accumulator & 0xFFFF) as u16
}
