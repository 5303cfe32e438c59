//! Descriptor for a post-quantum primitive supplied by an external library
//!
//! The key-management layer never does primitive math itself. Each supported
//! primitive is described by a static [`Primitive`] carrying its declared sizes
//! and a keygen callable; the registry hands these out by algorithm name.

use crate::error::{validate, Error, Result};
use zeroize::Zeroizing;

/// Output of a primitive keygen: public bytes and zeroize-on-drop secret bytes
pub type KeyPairBytes = (Vec<u8>, Zeroizing<Vec<u8>>);

/// Primitive family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Key encapsulation mechanism
    Kem,
    /// Digital signature
    Signature,
}

/// Static description of one primitive parameter set
#[derive(Debug)]
pub struct Primitive {
    /// Name the primitive library uses for this parameter set
    pub name: &'static str,
    /// Family of the primitive
    pub family: Family,
    /// Claimed NIST security category (1-5)
    pub nist_level: u8,
    /// Declared public-key length
    pub public_key_len: fn() -> usize,
    /// Declared secret-key length
    pub secret_key_len: fn() -> usize,
    /// Declared ciphertext length (KEM) or maximum signature length (signature)
    pub max_output_len: fn() -> usize,
    /// Keygen backed by the library's own CSPRNG
    pub keypair: fn() -> KeyPairBytes,
}

impl Primitive {
    /// Classical-equivalent bit strength of the claimed NIST category
    pub const fn security_bits(&self) -> u32 {
        match self.nist_level {
            0..=2 => 128,
            3 | 4 => 192,
            _ => 256,
        }
    }

    /// Run keygen and copy the result into caller-supplied buffers
    ///
    /// Both buffers must already have the declared lengths. If the library
    /// hands back keys of any other size the buffers are left untouched and
    /// a [`Error::GenerationFailure`] is returned.
    pub fn keygen_into(&self, public: &mut [u8], secret: &mut [u8]) -> Result<()> {
        validate::length(self.name, public.len(), (self.public_key_len)())?;
        validate::length(self.name, secret.len(), (self.secret_key_len)())?;

        let (pk, sk) = (self.keypair)();
        if pk.len() != public.len() || sk.len() != secret.len() {
            return Err(Error::generation(
                self.name,
                "primitive returned keys of unexpected length",
            ));
        }
        public.copy_from_slice(&pk);
        secret.copy_from_slice(&sk);
        Ok(())
    }
}
