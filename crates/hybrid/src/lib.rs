//! Hybrid classical/post-quantum key support
//!
//! A hybrid KEM key pairs a post-quantum KEM key with a classical
//! elliptic-curve key. This crate owns the classical half ([`ClassicalKey`])
//! and the composite byte layout that joins the two halves into one public
//! key and one private key.

pub mod classical;
pub mod composite;

pub use classical::{ClassicalCurve, ClassicalKey};
pub use composite::{composite_len, decode, encode_into, encode_public, encode_secret, PREFIX_LEN};
