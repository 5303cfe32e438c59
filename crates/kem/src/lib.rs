//! Key Encapsulation Mechanisms (KEM)
//!
//! This crate describes the post-quantum KEM parameter sets that the key
//! manager can hold keys for. The lattice arithmetic lives in the
//! `pqcrypto-mlkem` library; each parameter set is exposed here as a static
//! [`Primitive`](pqkm_api::Primitive) carrying its declared sizes and keygen.

pub mod mlkem;

// Re-exports
pub use mlkem::{MLKEM1024, MLKEM512, MLKEM768};

use pqkm_api::Primitive;

/// Every KEM parameter set provided by this crate
pub fn primitives() -> [&'static Primitive; 3] {
    [&MLKEM512, &MLKEM768, &MLKEM1024]
}
