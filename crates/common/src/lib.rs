//! Common implementations and shared functionality for the pqkm library
//!
//! This crate provides the zeroizing buffers and constant-time helpers used
//! across the pqkm components.

pub mod security;

// Re-export core security types
pub use security::{ct_eq, ct_eq_choice, SecretVec};
