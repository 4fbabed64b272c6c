use root_anchors::dns::{DNSResourceClass, DNSResourceType, name_to_wire};
use root_anchors::dnssec::{DigestType, DnsSecAlgorithm, DnskeyRecord, calculate_key_tag};

#[test]
fn test_dnssec_algorithm_conversion() {
    assert_eq!(DnsSecAlgorithm::from_u8(5), Some(DnsSecAlgorithm::RsaSha1));
    assert_eq!(
        DnsSecAlgorithm::from_u8(13),
        Some(DnsSecAlgorithm::EcdsaP256Sha256)
    );
    assert_eq!(DnsSecAlgorithm::from_u8(15), Some(DnsSecAlgorithm::Ed25519));
    assert_eq!(DnsSecAlgorithm::from_u8(0), None);

    assert_eq!(DnsSecAlgorithm::RsaSha256.to_u8(), 8);
    assert_eq!(DnsSecAlgorithm::Ed448.to_u8(), 16);
}

#[test]
fn test_dnssec_algorithm_policy() {
    assert!(DnsSecAlgorithm::RsaMd5.is_deprecated());
    assert!(DnsSecAlgorithm::EccGost.is_deprecated());
    assert!(!DnsSecAlgorithm::RsaSha256.is_deprecated());

    assert!(DnsSecAlgorithm::EcdsaP256Sha256.is_recommended());
    assert!(!DnsSecAlgorithm::RsaSha1.is_recommended());
}

#[test]
fn test_digest_type_conversion() {
    assert_eq!(DigestType::from_u8(1), Some(DigestType::Sha1));
    assert_eq!(DigestType::from_u8(2), Some(DigestType::Sha256));
    assert_eq!(DigestType::from_u8(4), Some(DigestType::Sha384));
    assert_eq!(DigestType::from_u8(10), None);

    assert_eq!(DigestType::Sha256.to_u8(), 2);
    assert_eq!(DigestType::Sha384.to_string(), "SHA384");
}

#[test]
fn test_key_tag_matches_record_method() {
    let public_key = [0x03, 0x01, 0x00, 0x01, 0xAB, 0xCD, 0xEF];
    let record = DnskeyRecord::new(".", 257, 8, "AwEAAavN7w==");
    assert_eq!(record.public_key_bytes().unwrap(), public_key.to_vec());
    assert_eq!(
        record.key_tag().unwrap(),
        calculate_key_tag(257, 3, 8, &public_key)
    );
}

#[test]
fn test_invalid_base64_public_key() {
    let record = DnskeyRecord::new(".", 257, 8, "not*base64");
    assert!(record.key_tag().is_err());
    assert!(record.to_ds(DigestType::Sha256).is_err());
}

#[test]
fn test_gost_ds_unsupported() {
    let record = DnskeyRecord::new(".", 257, 8, "AwEAAavN7w==");
    assert!(record.to_ds(DigestType::Gost94).is_err());
    assert_eq!(record.to_ds(DigestType::Sha384).unwrap().digest.len(), 96);
}

#[test]
fn test_child_zone_ds_owner_name() {
    // The owner name is part of the digest input, so the same key hashes
    // differently under another zone
    let root = DnskeyRecord::new(".", 257, 8, "AwEAAavN7w==");
    let child = DnskeyRecord::new("Example.", 257, 8, "AwEAAavN7w==");
    let lower = DnskeyRecord::new("example.", 257, 8, "AwEAAavN7w==");

    let root_ds = root.to_ds(DigestType::Sha256).unwrap();
    let child_ds = child.to_ds(DigestType::Sha256).unwrap();
    assert_ne!(root_ds.digest, child_ds.digest);
    assert_eq!(
        child_ds.digest,
        lower.to_ds(DigestType::Sha256).unwrap().digest
    );
    assert!(child_ds.matches(&lower).unwrap());
}

#[test]
fn test_record_metadata() {
    let record = DnskeyRecord::new(".", 257, 8, "AwEAAavN7w==");
    assert_eq!(record.rtype, DNSResourceType::DNSKEY);
    assert_eq!(record.rclass, DNSResourceClass::IN);
    assert_eq!(record.protocol, 3);
    assert_eq!(name_to_wire(&record.zone).unwrap(), vec![0]);
}
