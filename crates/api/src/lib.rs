//! Public API types for the pqkm library
//!
//! This crate provides the API surface shared by the pqkm ecosystem: the
//! error type, key selections and key-type classes, primitive descriptors
//! and the named-parameter protocol used to talk to the host framework.

pub mod error;
pub mod params;
pub mod primitive;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use primitive::{Family, KeyPairBytes, Primitive};
pub use types::*;
