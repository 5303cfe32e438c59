//! Import validation properties across adapters

use pqkm::api::params::{PARAM_PRIV_KEY, PARAM_PUB_KEY};
use pqkm::prelude::*;
use pqkm_tests::generated;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_wrong_private_length_leaves_key_intact(len in 0usize..4096) {
        let (kmgmt, mut key) = generated("kyber512");
        prop_assume!(len != kmgmt.info().private_key_len());
        let before = key.private_key().map(<[u8]>::to_vec);

        let params: ParamSet = vec![Param::octets(PARAM_PRIV_KEY, &vec![0x3C; len])].into();
        let is_length_error = matches!(
            kmgmt.import(Some(&mut key), Selection::PRIVATE_KEY, &params),
            Err(Error::MismatchedLength { .. })
        );
        prop_assert!(is_length_error);
        prop_assert_eq!(key.private_key().map(<[u8]>::to_vec), before);
        prop_assert!(key.has(Selection::KEYPAIR));
    }

    #[test]
    fn prop_hybrid_prefix_must_name_classical_length(prefix in any::<u32>()) {
        prop_assume!(prefix != 32);
        let kmgmt = KeyManagement::fetch(&ProviderContext::new(), "x25519_kyber512").unwrap();
        let mut public = vec![0x42; kmgmt.info().public_key_len()];
        public[..4].copy_from_slice(&prefix.to_be_bytes());

        let mut key = kmgmt.new_key().unwrap();
        let params: ParamSet = vec![Param::octets(PARAM_PUB_KEY, &public)].into();
        prop_assert!(kmgmt.import(Some(&mut key), Selection::PUBLIC_KEY, &params).is_err());
        prop_assert!(!key.has(Selection::PUBLIC_KEY));
    }
}
