//! Security primitives and memory safety utilities
//!
//! This module provides the types used throughout pqkm to hold and compare
//! sensitive key material.

pub mod compare;
pub mod secret;

// Re-export core security types
pub use compare::{ct_eq, ct_eq_choice};
pub use secret::SecretVec;
