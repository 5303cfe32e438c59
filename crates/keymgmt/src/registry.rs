//! Algorithm registry
//!
//! Maps a logical algorithm name and a key class to the primitive that backs
//! it, the declared key sizes and, for hybrid classes, the classical curve.
//! The table is built once, sorted by name, and searched with a binary search.

use std::sync::OnceLock;

use pqkm_api::error::{validate, Error, Result};
use pqkm_api::{Family, KeyType, Primitive};
use pqkm_common::SecretVec;
use pqkm_hybrid::{composite, ClassicalCurve, ClassicalKey};

#[derive(Debug, Clone, Copy)]
struct Entry {
    name: &'static str,
    primitive: &'static Primitive,
}

const fn entry(name: &'static str, primitive: &'static Primitive) -> Entry {
    Entry { name, primitive }
}

fn entries() -> &'static [Entry] {
    static ENTRIES: OnceLock<Vec<Entry>> = OnceLock::new();

    ENTRIES.get_or_init(|| {
        #[allow(unused_mut)]
        let mut entries = Vec::<Entry>::new();

        #[cfg(feature = "kem")]
        entries.extend([
            entry("kyber512", &pqkm_kem::MLKEM512),
            entry("kyber768", &pqkm_kem::MLKEM768),
            entry("kyber1024", &pqkm_kem::MLKEM1024),
            entry("mlkem512", &pqkm_kem::MLKEM512),
            entry("mlkem768", &pqkm_kem::MLKEM768),
            entry("mlkem1024", &pqkm_kem::MLKEM1024),
        ]);

        #[cfg(feature = "sign")]
        entries.extend([
            entry("oqs_sig_default", &pqkm_sign::MLDSA65),
            entry("dilithium2", &pqkm_sign::MLDSA44),
            entry("dilithium3", &pqkm_sign::MLDSA65),
            entry("dilithium5", &pqkm_sign::MLDSA87),
            entry("mldsa44", &pqkm_sign::MLDSA44),
            entry("mldsa65", &pqkm_sign::MLDSA65),
            entry("mldsa87", &pqkm_sign::MLDSA87),
            entry("falcon512", &pqkm_sign::FALCON512),
            entry("falcon1024", &pqkm_sign::FALCON1024),
            entry("sphincssha2128fsimple", &pqkm_sign::SPHINCS_SHA2_128F),
            entry("sphincssha2128ssimple", &pqkm_sign::SPHINCS_SHA2_128S),
            entry("sphincssha2192fsimple", &pqkm_sign::SPHINCS_SHA2_192F),
            entry("sphincssha2192ssimple", &pqkm_sign::SPHINCS_SHA2_192S),
            entry("sphincssha2256fsimple", &pqkm_sign::SPHINCS_SHA2_256F),
            entry("sphincssha2256ssimple", &pqkm_sign::SPHINCS_SHA2_256S),
        ]);

        entries.sort_unstable_by_key(|e| e.name);
        entries
    })
}

/// Names of every registered algorithm, in lookup order
pub fn algorithms() -> impl Iterator<Item = &'static str> {
    entries().iter().map(|e| e.name)
}

/// Resolved registry entry for one (algorithm, key class) pair
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmInfo {
    name: &'static str,
    key_type: KeyType,
    primitive: &'static Primitive,
    classical: Option<ClassicalCurve>,
}

/// Resolve an algorithm name for a key class
///
/// Fails with [`Error::UnknownAlgorithm`] when the name is not registered or
/// is registered for a different family than `key_type` asks for.
pub fn lookup(name: &str, key_type: KeyType) -> Result<AlgorithmInfo> {
    let entries = entries();
    let entry = entries
        .binary_search_by(|e| e.name.cmp(name))
        .map(|i| entries[i])
        .map_err(|_| Error::unknown_algorithm(name))?;

    let family = if key_type.is_kem() {
        Family::Kem
    } else {
        Family::Signature
    };
    if entry.primitive.family != family {
        return Err(Error::unknown_algorithm(name));
    }
    if key_type.is_hybrid() && !cfg!(feature = "hybrid") {
        return Err(Error::unknown_algorithm(name));
    }

    let classical = match key_type {
        KeyType::Sig | KeyType::Kem => None,
        KeyType::EcpHybridKem => Some(ClassicalCurve::P256),
        KeyType::EcxHybridKem => Some(ClassicalCurve::X25519),
    };

    Ok(AlgorithmInfo {
        name: entry.name,
        key_type,
        primitive: entry.primitive,
        classical,
    })
}

impl AlgorithmInfo {
    /// Registered algorithm name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Key class
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Backing post-quantum primitive
    pub fn primitive(&self) -> &'static Primitive {
        self.primitive
    }

    /// Classical curve of a hybrid class
    pub fn classical(&self) -> Option<ClassicalCurve> {
        self.classical
    }

    /// Post-quantum public-key length
    pub fn pq_public_key_len(&self) -> usize {
        (self.primitive.public_key_len)()
    }

    /// Post-quantum private-key length
    pub fn pq_private_key_len(&self) -> usize {
        (self.primitive.secret_key_len)()
    }

    /// Full public-key length, including the composite prefix for hybrids
    pub fn public_key_len(&self) -> usize {
        match self.classical {
            Some(curve) => composite::composite_len(curve.public_key_len(), self.pq_public_key_len()),
            None => self.pq_public_key_len(),
        }
    }

    /// Full private-key length, including the composite prefix for hybrids
    pub fn private_key_len(&self) -> usize {
        match self.classical {
            Some(curve) => composite::composite_len(curve.secret_key_len(), self.pq_private_key_len()),
            None => self.pq_private_key_len(),
        }
    }

    /// Largest signature or ciphertext a key of this class produces
    ///
    /// A hybrid ciphertext carries the prefixed classical ephemeral public key
    /// in front of the post-quantum ciphertext.
    pub fn max_output_len(&self) -> usize {
        let pq = (self.primitive.max_output_len)();
        match self.classical {
            Some(curve) => composite::PREFIX_LEN + curve.public_key_len() + pq,
            None => pq,
        }
    }

    /// Classical-equivalent security bits of the post-quantum half
    pub fn security_bits(&self) -> u32 {
        self.primitive.security_bits()
    }

    /// Validate an encoded public key and rebuild its classical half
    pub fn decode_public(&self, bytes: &[u8]) -> Result<Option<ClassicalKey>> {
        validate::length("public key", bytes.len(), self.public_key_len())?;
        match self.classical {
            Some(curve) => {
                let (classical, _) = composite::decode(bytes, curve.public_key_len())?;
                Ok(Some(ClassicalKey::from_public(curve, classical)?))
            }
            None => Ok(None),
        }
    }

    /// Validate an encoded private key and rebuild its classical half
    pub fn decode_private(&self, bytes: &[u8]) -> Result<Option<ClassicalKey>> {
        validate::length("private key", bytes.len(), self.private_key_len())?;
        match self.classical {
            Some(curve) => {
                let (classical, _) = composite::decode(bytes, curve.secret_key_len())?;
                Ok(Some(ClassicalKey::from_secret(curve, classical)?))
            }
            None => Ok(None),
        }
    }

    /// Run the registered keygen
    ///
    /// For hybrid classes `classical` is reused when supplied and must hold
    /// its scalar; otherwise a fresh classical key pair is drawn.
    pub fn keygen(&self, classical: Option<&ClassicalKey>) -> Result<GeneratedKey> {
        let mut pq_public = validate::reserve("public key", self.pq_public_key_len())?;
        let mut pq_private = SecretVec::try_zeroed(self.pq_private_key_len())?;
        self.primitive
            .keygen_into(&mut pq_public, pq_private.as_mut_slice())?;

        let Some(curve) = self.classical else {
            return Ok(GeneratedKey {
                public: pq_public,
                private: pq_private,
                classical: None,
            });
        };

        let classical = match classical {
            Some(key) => key.clone(),
            None => ClassicalKey::generate(curve)?,
        };
        let classical_secret = classical
            .secret_bytes()
            .ok_or_else(|| Error::generation(self.name, "classical key has no private part"))?;

        Ok(GeneratedKey {
            public: composite::encode_public(classical.public_bytes(), &pq_public)?,
            private: composite::encode_secret(&classical_secret, pq_private.as_slice())?,
            classical: Some(classical),
        })
    }
}

/// Key material produced by one generation event
#[derive(Debug)]
pub struct GeneratedKey {
    /// Encoded public key
    pub public: Vec<u8>,
    /// Encoded private key
    pub private: SecretVec,
    /// Classical half of a hybrid key
    pub classical: Option<ClassicalKey>,
}
