//! Secret data types with guaranteed zeroization
//!
//! This module provides the owned buffer used for private-key material. The
//! buffer is zeroized in place before its allocation is released, both on drop
//! and on explicit [`Zeroize::zeroize`].

use core::fmt;
use pqkm_api::error::{validate, Result};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Variable-size secret vector that guarantees zeroization
///
/// This type provides:
/// - Automatic zeroization on drop
/// - Fallible allocation, so an out-of-memory condition is an error rather
///   than an abort
/// - Constant-time equality
/// - A `Debug` implementation that never prints the bytes
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Take ownership of existing bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Allocate `len` zero bytes
    pub fn try_zeroed(len: usize) -> Result<Self> {
        Ok(Self {
            data: validate::reserve("secret buffer", len)?,
        })
    }

    /// Copy a slice into a new secret buffer
    pub fn try_from_slice(slice: &[u8]) -> Result<Self> {
        let mut secret = Self::try_zeroed(slice.len())?;
        secret.data.copy_from_slice(slice);
        Ok(secret)
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable reference to the inner data
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Constant-time comparison with another secret
    pub fn ct_eq(&self, other: &Self) -> bool {
        super::compare::ct_eq(&self.data, &other.data)
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for SecretVec {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec(len={}, [REDACTED])", self.data.len())
    }
}
