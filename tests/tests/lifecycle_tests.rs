//! Key lifecycle across every adapter

use pqkm::api::params::{PARAM_ENCODED_PUBLIC_KEY, PARAM_PRIV_KEY, PARAM_PUB_KEY};
use pqkm::prelude::*;
use pqkm_tests::{adapter_names, ctx, exported, generated, octets_len};

#[test]
fn test_every_adapter_generates_distinct_keypairs() {
    let names = adapter_names();
    assert!(!names.is_empty());

    for name in names {
        let (kmgmt, first) = generated(name);
        let gen = kmgmt.gen_init(Selection::KEYPAIR).unwrap();
        let second = kmgmt.gen(Some(&gen)).unwrap();
        kmgmt.gen_cleanup(Some(gen));

        assert!(kmgmt.has(Some(&first), Selection::KEYPAIR), "{name}");
        assert!(kmgmt.has(Some(&second), Selection::KEYPAIR), "{name}");
        assert_ne!(first.public_key(), second.public_key(), "{name}");
        assert!(!kmgmt.matches(Some(&first), Some(&second), Selection::PRIVATE_KEY), "{name}");
        assert!(kmgmt.matches(Some(&first), Some(&first), Selection::PRIVATE_KEY), "{name}");

        assert_eq!(first.public_key().unwrap().len(), kmgmt.info().public_key_len(), "{name}");
        assert_eq!(first.private_key().unwrap().len(), kmgmt.info().private_key_len(), "{name}");
    }
}

#[test]
fn test_every_adapter_roundtrips_through_export() {
    for name in adapter_names() {
        let (kmgmt, key) = generated(name);
        let params = exported(&kmgmt, &key, Selection::KEYPAIR);

        let mut copy = kmgmt.new_key().unwrap();
        kmgmt.import(Some(&mut copy), Selection::KEYPAIR, &params).unwrap();

        assert_eq!(copy.public_key(), key.public_key(), "{name}");
        assert_eq!(copy.private_key(), key.private_key(), "{name}");
        kmgmt.free(Some(copy));
        kmgmt.free(Some(key));
    }
}

#[test]
fn test_public_match_is_false_when_both_hold_public_keys() {
    for name in adapter_names() {
        let (kmgmt, key) = generated(name);
        let empty = kmgmt.new_key().unwrap();

        assert!(!kmgmt.matches(Some(&key), Some(&key), Selection::PUBLIC_KEY), "{name}");
        assert!(kmgmt.matches(Some(&empty), Some(&key), Selection::PUBLIC_KEY), "{name}");
        assert!(kmgmt.matches(Some(&key), Some(&key), Selection::DOMAIN_PARAMETERS), "{name}");
    }
}

#[test]
fn test_encoded_public_key_drops_private_key() {
    for name in adapter_names() {
        let (kmgmt, mut key) = generated(name);
        let (_, other) = generated(name);
        let params: ParamSet =
            vec![Param::octets(PARAM_ENCODED_PUBLIC_KEY, other.public_key().unwrap())].into();

        kmgmt.set_params(Some(&mut key), &params).unwrap();
        assert!(!kmgmt.has(Some(&key), Selection::PRIVATE_KEY), "{name}");
        assert!(kmgmt.has(Some(&key), Selection::PUBLIC_KEY), "{name}");
        assert_eq!(key.public_key(), other.public_key(), "{name}");
    }
}

#[test]
fn test_kyber768_sizes() {
    let kmgmt = KeyManagement::fetch(&ctx(), "kyber768").unwrap();
    let mut key = kmgmt.new_key().unwrap();
    key.generate().unwrap();

    assert!(kmgmt.has(Some(&key), Selection::PUBLIC_KEY | Selection::PRIVATE_KEY));
    let public = exported(&kmgmt, &key, Selection::PUBLIC_KEY);
    let private = exported(&kmgmt, &key, Selection::PRIVATE_KEY);

    assert_eq!(octets_len(&public, PARAM_PUB_KEY), Some(1184));
    assert_eq!(octets_len(&public, PARAM_PRIV_KEY), None);
    assert_eq!(octets_len(&private, PARAM_PRIV_KEY), Some(2400));
    assert_eq!(octets_len(&private, PARAM_PUB_KEY), None);
}

#[test]
fn test_hybrid_destroy_then_free_empty_handle() {
    for name in ["p256_kyber768", "x25519_kyber512"] {
        let (kmgmt, key) = generated(name);
        assert!(key.classical().is_some());

        let mut handle = Some(key);
        kmgmt.free(handle.take());
        kmgmt.free(handle.take());
        assert!(handle.is_none());
    }
}

#[test]
fn test_wrong_length_import_leaves_no_partial_data() {
    let kmgmt = KeyManagement::fetch(&ctx(), "kyber768").unwrap();
    let mut key = kmgmt.new_key().unwrap();

    let params: ParamSet = vec![
        Param::octets(PARAM_PUB_KEY, &[0x11; 1184]),
        Param::octets(PARAM_PRIV_KEY, &[0x22; 2399]),
    ]
    .into();
    let err = kmgmt
        .import(Some(&mut key), Selection::KEYPAIR, &params)
        .unwrap_err();

    assert_eq!(
        err,
        Error::MismatchedLength {
            context: "private key",
            expected: 2400,
            actual: 2399
        }
    );
    assert!(!kmgmt.has(Some(&key), Selection::PUBLIC_KEY));
    assert!(!kmgmt.has(Some(&key), Selection::PRIVATE_KEY));
}

#[test]
fn test_load_transfers_ownership() {
    let (kmgmt, key) = generated("dilithium3");
    let public = key.public_key().unwrap().to_vec();

    let mut reference = Some(key);
    let loaded = kmgmt.load(&mut reference).unwrap();
    assert!(reference.is_none());
    assert_eq!(loaded.public_key().unwrap(), &public[..]);
    assert!(kmgmt.load(&mut reference).is_err());
}

#[test]
fn test_tls_group_and_properties_flow_into_key() {
    let kmgmt = KeyManagement::fetch(&ctx(), "x25519_kyber768").unwrap();
    let mut gen = kmgmt.gen_init(Selection::KEYPAIR).unwrap();
    let params: ParamSet = vec![
        Param::utf8("group", "x25519_kyber768"),
        Param::utf8("properties", "provider=pqkm"),
    ]
    .into();

    kmgmt.gen_set_params(Some(&mut gen), &params).unwrap();
    let key = kmgmt.gen(Some(&gen)).unwrap();
    kmgmt.gen_cleanup(Some(gen));

    assert_eq!(key.tls_name(), Some("x25519_kyber768"));
    assert_eq!(key.effective_property_query(), Some("provider=pqkm"));
}

#[test]
fn test_get_params_reports_sizes() {
    let (kmgmt, key) = generated("p256_kyber512");
    let mut params = ParamSet::requesting(&["bits", "security-bits", "max-size", "pub"]);
    kmgmt.get_params(Some(&key), &mut params).unwrap();

    assert_eq!(params.locate("bits").and_then(Param::as_int), Some(128));
    assert_eq!(params.locate("security-bits").and_then(Param::as_int), Some(128));
    assert_eq!(params.locate("max-size").and_then(Param::as_int), Some(4 + 65 + 768));
    assert_eq!(octets_len(&params, "pub"), Some(4 + 65 + 800));
}

#[test]
fn test_export_emits_only_what_export_types_lists() {
    let (kmgmt, key) = generated("kyber768");
    for selection in [
        Selection::DOMAIN_PARAMETERS,
        Selection::OTHER_PARAMETERS,
        Selection::PUBLIC_KEY,
        Selection::PRIVATE_KEY,
        Selection::KEYPAIR,
        Selection::ALL,
    ] {
        let params = exported(&kmgmt, &key, selection);
        let emitted: Vec<&str> = params.iter().map(Param::key).collect();
        let listed: Vec<&str> = kmgmt
            .export_types(selection)
            .unwrap_or_default()
            .iter()
            .map(|d| d.key)
            .collect();
        assert_eq!(emitted, listed, "{selection:?}");
    }
    assert_eq!(octets_len(&exported(&kmgmt, &key, Selection::DOMAIN_PARAMETERS), PARAM_PRIV_KEY), None);
}
