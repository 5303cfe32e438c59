//! # pqkm
//!
//! Key management for post-quantum and hybrid classical/post-quantum keys.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pqkm = "0.3"
//! ```
//!
//! ```no_run
//! use pqkm::prelude::*;
//!
//! let ctx = ProviderContext::default();
//! let kmgmt = KeyManagement::fetch(&ctx, "kyber768")?;
//! let gen = kmgmt.gen_init(Selection::KEYPAIR)?;
//! let key = kmgmt.gen(Some(&gen))?;
//! kmgmt.gen_cleanup(Some(gen));
//! assert!(kmgmt.has(Some(&key), Selection::KEYPAIR));
//! # Ok::<(), pqkm::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `kem` (default): ML-KEM / Kyber key management
//! - `sign` (default): ML-DSA / Dilithium, Falcon and SPHINCS+ key management
//! - `hybrid` (default): P-256 and X25519 hybrids of the KEM family
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pqkm-api`]: Error type, selections, primitive descriptors, named parameters
//! - [`pqkm-common`]: Zeroizing buffers and constant-time comparison
//! - [`pqkm-kem`]: KEM primitive descriptors
//! - [`pqkm-sign`]: Signature primitive descriptors
//! - [`pqkm-hybrid`]: Classical curve handles and composite key encoding
//! - [`pqkm-keymgmt`]: Registry, key objects, generation and dispatch

pub use pqkm_api as api;
pub use pqkm_common as common;
pub use pqkm_keymgmt as keymgmt;

#[cfg(feature = "kem")]
pub use pqkm_kem as kem;

#[cfg(feature = "sign")]
pub use pqkm_sign as sign;

#[cfg(feature = "hybrid")]
pub use pqkm_hybrid as hybrid;

/// Common imports for pqkm users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export selection, key classes and the parameter protocol
    pub use crate::api::{KeyType, Selection};
    pub use crate::api::params::{Param, ParamDescriptor, ParamKind, ParamSet, ParamValue};

    // Re-export the key-management surface
    pub use crate::keymgmt::{GenContext, Key, KeyManagement, ProviderContext};

    // Re-export security types
    pub use crate::common::SecretVec;
}
