//! Digital Signature Schemes
//!
//! This crate describes the post-quantum signature parameter sets that the
//! key manager can hold keys for. Signing itself is out of scope here; each
//! parameter set is a static [`Primitive`](pqkm_api::Primitive) with its
//! declared sizes and a keygen backed by the matching `pqcrypto` library.

pub mod pq;

// Re-exports from post-quantum schemes
pub use pq::falcon::{FALCON1024, FALCON512};
pub use pq::mldsa::{MLDSA44, MLDSA65, MLDSA87};
pub use pq::sphincs::{
    SPHINCS_SHA2_128F, SPHINCS_SHA2_128S, SPHINCS_SHA2_192F, SPHINCS_SHA2_192S,
    SPHINCS_SHA2_256F, SPHINCS_SHA2_256S,
};

use pqkm_api::Primitive;

/// Every signature parameter set provided by this crate
pub fn primitives() -> [&'static Primitive; 11] {
    [
        &MLDSA44,
        &MLDSA65,
        &MLDSA87,
        &FALCON512,
        &FALCON1024,
        &SPHINCS_SHA2_128F,
        &SPHINCS_SHA2_128S,
        &SPHINCS_SHA2_192F,
        &SPHINCS_SHA2_192S,
        &SPHINCS_SHA2_256F,
        &SPHINCS_SHA2_256S,
    ]
}
