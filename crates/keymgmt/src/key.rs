//! The key object
//!
//! A [`Key`] holds the identity of its algorithm and the key parts that have
//! been generated or imported so far. Private material lives in a
//! [`SecretVec`] and is zeroized whenever it is replaced, erased or dropped.

use core::fmt;

use pqkm_api::error::{validate, Error, Result};
use pqkm_api::params::{ParamSet, ParamSetBuilder, PARAM_PRIV_KEY, PARAM_PUB_KEY};
use pqkm_api::{KeyType, Selection};
use pqkm_common::SecretVec;
use pqkm_hybrid::ClassicalKey;
use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::context::ProviderContext;
use crate::registry::{self, AlgorithmInfo};

/// An asymmetric key of one registered algorithm and key class
pub struct Key {
    ctx: ProviderContext,
    info: AlgorithmInfo,
    tls_name: Option<String>,
    public_key: Option<Vec<u8>>,
    private_key: Option<SecretVec>,
    classical: Option<ClassicalKey>,
    classical_seed: Option<ClassicalKey>,
    property_query: Option<String>,
}

fn octets<'a>(params: &'a ParamSet, key: &'static str) -> Result<Option<&'a [u8]>> {
    match params.locate(key) {
        None => Ok(None),
        Some(param) => param
            .as_octets()
            .map(Some)
            .ok_or_else(|| Error::invalid_input(key, "expected an octet string")),
    }
}

impl Key {
    /// Construct an empty key
    ///
    /// `classical` is only accepted for hybrid classes, must be on the
    /// class's curve and must hold its scalar. A later [`Key::generate`]
    /// reuses it instead of drawing a fresh classical key pair.
    pub fn new(
        ctx: &ProviderContext,
        name: &str,
        classical: Option<ClassicalKey>,
        key_type: KeyType,
        property_query: Option<&str>,
    ) -> Result<Self> {
        debug!(algorithm = name, %key_type, "key new");
        let info = registry::lookup(name, key_type)?;

        if let Some(seed) = &classical {
            validate::parameter(
                info.classical() == Some(seed.curve()),
                "classical key",
                "curve does not match the key class",
            )?;
            validate::parameter(
                seed.has_secret(),
                "classical key",
                "classical key has no private part",
            )?;
        }

        let property_query = property_query
            .map(|q| validate::owned_str("property query", q))
            .transpose()?;

        Ok(Self {
            ctx: ctx.clone(),
            info,
            tls_name: None,
            public_key: None,
            private_key: None,
            classical: None,
            classical_seed: classical,
            property_query,
        })
    }

    /// Fill every key part from the registered keygen
    ///
    /// Nothing is changed if generation fails.
    pub fn generate(&mut self) -> Result<()> {
        debug!(algorithm = self.info.name(), "key generate");
        let generated = self.info.keygen(self.classical_seed.as_ref())?;

        self.erase_private();
        self.public_key = Some(generated.public);
        self.private_key = Some(generated.private);
        self.classical = generated.classical;
        Ok(())
    }

    /// True iff every key part named by `selection` is present
    ///
    /// Domain parameters are always present.
    pub fn has(&self, selection: Selection) -> bool {
        trace!(algorithm = self.info.name(), ?selection, "key has");
        let mut ok = true;
        if selection.intersects(Selection::PUBLIC_KEY) {
            ok = ok && self.public_key.is_some();
        }
        if selection.intersects(Selection::PRIVATE_KEY) {
            ok = ok && self.private_key.is_some();
        }
        ok
    }

    /// Compare the parts of two keys named by `selection`
    ///
    /// Byte comparisons run in constant time. For the public part the result
    /// is false whenever *both* keys hold a public key, and true only when
    /// `self` holds none.
    pub fn matches(&self, other: &Key, selection: Selection) -> bool {
        trace!(algorithm = self.info.name(), ?selection, "key match");
        let same_algorithm = self.same_algorithm(other);
        let mut ok = true;

        if selection.intersects(Selection::DOMAIN_PARAMETERS) {
            ok = ok && same_algorithm;
        }

        if selection.intersects(Selection::PRIVATE_KEY) {
            ok = ok
                && same_algorithm
                && match (&self.private_key, &other.private_key) {
                    (None, None) => true,
                    (Some(a), Some(b)) => a.ct_eq(b),
                    _ => false,
                };
        }

        if selection.intersects(Selection::PUBLIC_KEY) {
            ok = ok && same_algorithm && self.public_key.is_none();
        }

        ok
    }

    fn same_algorithm(&self, other: &Key) -> bool {
        self.info.key_type() == other.info.key_type() && self.info.name() == other.info.name()
    }

    /// Replace key parts from `pub` and `priv` octet-string parameters
    ///
    /// Only the parts whose bit is in `selection` are read. Every value is
    /// validated before anything is stored, so a failed import leaves the
    /// key unchanged. The stored parts afterwards are exactly the imported
    /// ones.
    pub fn import(&mut self, selection: Selection, params: &ParamSet) -> Result<()> {
        debug!(algorithm = self.info.name(), ?selection, "key import");
        validate::parameter(
            selection.intersects(Selection::KEYPAIR),
            "import",
            "selection names no key part",
        )?;

        let public = if selection.intersects(Selection::PUBLIC_KEY) {
            octets(params, PARAM_PUB_KEY)?
        } else {
            None
        };
        let private = if selection.intersects(Selection::PRIVATE_KEY) {
            octets(params, PARAM_PRIV_KEY)?
        } else {
            None
        };
        if public.is_none() && private.is_none() {
            return Err(Error::invalid_input(
                "import",
                "no pub or priv parameter supplied",
            ));
        }

        let public_classical = public.map(|b| self.info.decode_public(b)).transpose()?;
        let private_classical = private.map(|b| self.info.decode_private(b)).transpose()?;

        let public = public
            .map(|b| {
                let mut owned = validate::reserve(PARAM_PUB_KEY, b.len())?;
                owned.copy_from_slice(b);
                Ok::<_, Error>(owned)
            })
            .transpose()?;
        let private = private.map(SecretVec::try_from_slice).transpose()?;

        self.erase_private();
        self.classical = private_classical.flatten().or(public_classical.flatten());
        self.public_key = public;
        self.private_key = private;
        Ok(())
    }

    /// Hand the key parts named by `selection` to `sink`
    ///
    /// Only parts whose bit is in `selection` are emitted, and absent parts
    /// are left out. The complete parameter set is built first and `sink` is
    /// called exactly once with it.
    pub fn export<T, F>(&self, selection: Selection, sink: F) -> Result<T>
    where
        F: FnOnce(&ParamSet) -> Result<T>,
    {
        debug!(algorithm = self.info.name(), ?selection, "key export");
        let mut builder = ParamSetBuilder::new();

        if selection.intersects(Selection::PUBLIC_KEY) {
            if let Some(public) = &self.public_key {
                builder.push_octets(PARAM_PUB_KEY, public);
            }
        }
        if selection.intersects(Selection::PRIVATE_KEY) {
            if let Some(private) = &self.private_key {
                builder.push_octets(PARAM_PRIV_KEY, private.as_slice());
            }
        }

        sink(&builder.build())
    }

    /// Erase private material and release the key
    pub fn destroy(self) {
        debug!(algorithm = self.info.name(), "key free");
        drop(self);
    }

    /// Replace the public key with an encoded public key
    ///
    /// The private key no longer belongs to the new public key and is erased.
    /// For hybrid classes the classical handle is rebuilt from the public
    /// portion.
    pub fn set_encoded_public_key(&mut self, bytes: &[u8]) -> Result<()> {
        let classical = self.info.decode_public(bytes)?;
        let mut public = validate::reserve("encoded-pub-key", bytes.len())?;
        public.copy_from_slice(bytes);

        self.erase_private();
        self.public_key = Some(public);
        self.classical = classical;
        Ok(())
    }

    /// Replace the property query
    pub fn set_property_query(&mut self, query: Option<&str>) -> Result<()> {
        let query = query
            .map(|q| validate::owned_str("property query", q))
            .transpose()?;
        self.property_query = query;
        Ok(())
    }

    pub(crate) fn set_tls_name(&mut self, tls_name: Option<String>) {
        self.tls_name = tls_name;
    }

    fn erase_private(&mut self) {
        if let Some(mut private) = self.private_key.take() {
            private.zeroize();
        }
        if let Some(classical) = self.classical.as_mut() {
            classical.forget_secret();
        }
    }

    /// Registry entry of this key
    pub fn info(&self) -> &AlgorithmInfo {
        &self.info
    }

    /// Registered algorithm name
    pub fn algorithm_name(&self) -> &'static str {
        self.info.name()
    }

    /// Key class
    pub fn key_type(&self) -> KeyType {
        self.info.key_type()
    }

    /// TLS group name carried as metadata
    pub fn tls_name(&self) -> Option<&str> {
        self.tls_name.as_deref()
    }

    /// Encoded public key
    pub fn public_key(&self) -> Option<&[u8]> {
        self.public_key.as_deref()
    }

    /// Encoded private key
    pub fn private_key(&self) -> Option<&[u8]> {
        self.private_key.as_ref().map(SecretVec::as_slice)
    }

    /// Classical half of a hybrid key
    pub fn classical(&self) -> Option<&ClassicalKey> {
        self.classical.as_ref()
    }

    /// The key's own property query
    pub fn property_query(&self) -> Option<&str> {
        self.property_query.as_deref()
    }

    /// The key's property query, or the provider default if it has none
    pub fn effective_property_query(&self) -> Option<&str> {
        self.property_query().or_else(|| self.ctx.property_query())
    }

    /// Provider context the key was created in
    pub fn context(&self) -> &ProviderContext {
        &self.ctx
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.erase_private();
        self.classical = None;
        self.classical_seed = None;
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("algorithm", &self.info.name())
            .field("key_type", &self.info.key_type())
            .field("has_public", &self.public_key.is_some())
            .field("has_private", &self.private_key.is_some())
            .field("tls_name", &self.tls_name)
            .field("property_query", &self.property_query)
            .finish()
    }
}
