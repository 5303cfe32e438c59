//! Shared helpers for the pqkm integration tests

use pqkm::keymgmt::dispatch;
use pqkm::prelude::*;

/// Provider context used by the tests
pub fn ctx() -> ProviderContext {
    ProviderContext::new().with_name("pqkm-tests")
}

/// Names of every adapter available in this build
pub fn adapter_names() -> Vec<&'static str> {
    dispatch::descriptors().map(|d| d.name).collect()
}

/// Fetch an adapter and generate one key through its generation context
pub fn generated(adapter: &str) -> (KeyManagement, Key) {
    let kmgmt = KeyManagement::fetch(&ctx(), adapter).unwrap();
    let gen = kmgmt.gen_init(Selection::KEYPAIR).unwrap();
    let key = kmgmt.gen(Some(&gen)).unwrap();
    kmgmt.gen_cleanup(Some(gen));
    (kmgmt, key)
}

/// Export the parts named by `selection` into an owned parameter set
pub fn exported(kmgmt: &KeyManagement, key: &Key, selection: Selection) -> ParamSet {
    kmgmt
        .export(Some(key), selection, |params| Ok(params.clone()))
        .unwrap()
}

/// Byte length of an octet-string parameter
pub fn octets_len(params: &ParamSet, name: &str) -> Option<usize> {
    params.locate(name).and_then(Param::as_octets).map(<[u8]>::len)
}
