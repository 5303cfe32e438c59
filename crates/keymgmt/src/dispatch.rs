//! Per-algorithm adapter table and the key-management entry points
//!
//! Each [`KeyMgmtDescriptor`] binds a name the host fetches by to a registry
//! algorithm and key class. All descriptors share the same operations on
//! [`KeyManagement`]; absent handles from the host are passed as `None`.

use pqkm_api::error::{validate, Result};
use pqkm_api::params::{ParamDescriptor, ParamSet};
use pqkm_api::KeyType::{EcpHybridKem as Ecp, EcxHybridKem as Ecx, Kem as Plain};
use pqkm_api::{Error, KeyType, Selection};
use tracing::{debug, trace};

use crate::context::ProviderContext;
use crate::gen::GenContext;
use crate::key::Key;
use crate::params;
use crate::registry::{self, AlgorithmInfo};

/// One adapter: the fetch name, the registry algorithm and the key class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMgmtDescriptor {
    /// Name the host fetches the adapter by
    pub name: &'static str,
    /// Registry algorithm name
    pub algorithm: &'static str,
    /// Key class
    pub key_type: KeyType,
}

const fn sig(name: &'static str) -> KeyMgmtDescriptor {
    KeyMgmtDescriptor {
        name,
        algorithm: name,
        key_type: KeyType::Sig,
    }
}

const fn kem(name: &'static str, algorithm: &'static str, key_type: KeyType) -> KeyMgmtDescriptor {
    KeyMgmtDescriptor {
        name,
        algorithm,
        key_type,
    }
}

static DESCRIPTORS: [KeyMgmtDescriptor; 33] = [
    sig("oqs_sig_default"),
    sig("dilithium2"),
    sig("dilithium3"),
    sig("dilithium5"),
    sig("mldsa44"),
    sig("mldsa65"),
    sig("mldsa87"),
    sig("falcon512"),
    sig("falcon1024"),
    sig("sphincssha2128fsimple"),
    sig("sphincssha2128ssimple"),
    sig("sphincssha2192fsimple"),
    sig("sphincssha2192ssimple"),
    sig("sphincssha2256fsimple"),
    sig("sphincssha2256ssimple"),
    kem("kyber512", "kyber512", Plain),
    kem("p256_kyber512", "kyber512", Ecp),
    kem("x25519_kyber512", "kyber512", Ecx),
    kem("kyber768", "kyber768", Plain),
    kem("p256_kyber768", "kyber768", Ecp),
    kem("x25519_kyber768", "kyber768", Ecx),
    kem("kyber1024", "kyber1024", Plain),
    kem("p256_kyber1024", "kyber1024", Ecp),
    kem("x25519_kyber1024", "kyber1024", Ecx),
    kem("mlkem512", "mlkem512", Plain),
    kem("p256_mlkem512", "mlkem512", Ecp),
    kem("x25519_mlkem512", "mlkem512", Ecx),
    kem("mlkem768", "mlkem768", Plain),
    kem("p256_mlkem768", "mlkem768", Ecp),
    kem("x25519_mlkem768", "mlkem768", Ecx),
    kem("mlkem1024", "mlkem1024", Plain),
    kem("p256_mlkem1024", "mlkem1024", Ecp),
    kem("x25519_mlkem1024", "mlkem1024", Ecx),
];

/// Adapters whose algorithm is available in this build
pub fn descriptors() -> impl Iterator<Item = &'static KeyMgmtDescriptor> {
    DESCRIPTORS
        .iter()
        .filter(|d| registry::lookup(d.algorithm, d.key_type).is_ok())
}

/// Key-management entry points bound to one adapter
#[derive(Debug, Clone)]
pub struct KeyManagement {
    ctx: ProviderContext,
    descriptor: &'static KeyMgmtDescriptor,
    info: AlgorithmInfo,
}

impl KeyManagement {
    /// Resolve an adapter by name
    pub fn fetch(ctx: &ProviderContext, name: &str) -> Result<Self> {
        debug!(adapter = name, "keymgmt fetch");
        let descriptor = DESCRIPTORS
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| Error::unknown_algorithm(name))?;
        let info = registry::lookup(descriptor.algorithm, descriptor.key_type)?;

        Ok(Self {
            ctx: ctx.clone(),
            descriptor,
            info,
        })
    }

    /// Adapter descriptor
    pub fn descriptor(&self) -> &'static KeyMgmtDescriptor {
        self.descriptor
    }

    /// Registry entry of the adapter's algorithm
    pub fn info(&self) -> &AlgorithmInfo {
        &self.info
    }

    /// Construct an empty key
    pub fn new_key(&self) -> Result<Key> {
        Key::new(
            &self.ctx,
            self.descriptor.algorithm,
            None,
            self.descriptor.key_type,
            None,
        )
    }

    /// Destroy a key; an absent handle is a no-op
    pub fn free(&self, key: Option<Key>) {
        match key {
            Some(key) => key.destroy(),
            None => trace!(adapter = self.descriptor.name, "free of null key"),
        }
    }

    /// Start a generation
    pub fn gen_init(&self, selection: Selection) -> Result<GenContext> {
        GenContext::init(
            &self.ctx,
            selection,
            self.descriptor.algorithm,
            self.descriptor.key_type,
        )
    }

    /// Generate a key from a generation context
    pub fn gen(&self, gen: Option<&GenContext>) -> Result<Key> {
        validate::present(gen, "gen")?.generate()
    }

    /// Release a generation context; an absent handle is a no-op
    pub fn gen_cleanup(&self, gen: Option<GenContext>) {
        if let Some(gen) = gen {
            gen.cleanup();
        }
    }

    /// Set generation parameters
    pub fn gen_set_params(&self, gen: Option<&mut GenContext>, params: &ParamSet) -> Result<()> {
        validate::present(gen, "gen set params")?.set_params(params)
    }

    /// Parameters a generation context accepts
    pub fn gen_settable_params(&self) -> &'static [ParamDescriptor] {
        params::gen_settable_params()
    }

    /// Fill requested parameters from a key
    pub fn get_params(&self, key: Option<&Key>, params: &mut ParamSet) -> Result<()> {
        params::get_params(validate::present(key, "get params")?, params)
    }

    /// Parameters [`KeyManagement::get_params`] understands
    pub fn gettable_params(&self) -> &'static [ParamDescriptor] {
        params::gettable_params()
    }

    /// Apply settable parameters to a key
    pub fn set_params(&self, key: Option<&mut Key>, params: &ParamSet) -> Result<()> {
        params::set_params(validate::present(key, "set params")?, params)
    }

    /// Parameters [`KeyManagement::set_params`] understands
    pub fn settable_params(&self) -> &'static [ParamDescriptor] {
        params::settable_params()
    }

    /// Whether a key holds the parts named by `selection`
    pub fn has(&self, key: Option<&Key>, selection: Selection) -> bool {
        key.is_some_and(|k| k.has(selection))
    }

    /// Compare two keys; false if either handle is absent
    pub fn matches(&self, key1: Option<&Key>, key2: Option<&Key>, selection: Selection) -> bool {
        match (key1, key2) {
            (Some(a), Some(b)) => a.matches(b, selection),
            _ => false,
        }
    }

    /// Import key parts into a key
    pub fn import(&self, key: Option<&mut Key>, selection: Selection, params: &ParamSet) -> Result<()> {
        validate::present(key, "import")?.import(selection, params)
    }

    /// Parameters an import reads
    pub fn import_types(&self, selection: Selection) -> Option<&'static [ParamDescriptor]> {
        params::import_types(selection)
    }

    /// Export key parts to `sink`
    pub fn export<T, F>(&self, key: Option<&Key>, selection: Selection, sink: F) -> Result<T>
    where
        F: FnOnce(&ParamSet) -> Result<T>,
    {
        validate::present(key, "export")?.export(selection, sink)
    }

    /// Parameters an export emits
    pub fn export_types(&self, selection: Selection) -> Option<&'static [ParamDescriptor]> {
        params::export_types(selection)
    }

    /// Take ownership of a key by reference, leaving the reference empty
    pub fn load(&self, reference: &mut Option<Key>) -> Result<Key> {
        debug!(adapter = self.descriptor.name, "keymgmt load");
        validate::present(reference.take(), "load")
    }
}
