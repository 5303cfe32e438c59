//! Composite encoding of hybrid keys
//!
//! Public and private keys share one layout:
//!
//! ```text
//! +--------------------+------------------+-----------------+
//! | classical len (BE) | classical part   | post-quantum    |
//! |      4 bytes       | classical len    | remaining bytes |
//! +--------------------+------------------+-----------------+
//! ```

use pqkm_api::error::{validate, Error, Result};
use pqkm_common::SecretVec;

/// Length of the big-endian classical-length prefix
pub const PREFIX_LEN: usize = 4;

/// Total encoded length for the given halves
pub const fn composite_len(classical_len: usize, pq_len: usize) -> usize {
    PREFIX_LEN + classical_len + pq_len
}

/// Write the composite encoding into a buffer of exactly the composite length
pub fn encode_into(out: &mut [u8], classical: &[u8], pq: &[u8]) -> Result<()> {
    validate::length(
        "composite key",
        out.len(),
        composite_len(classical.len(), pq.len()),
    )?;
    let prefix = u32::try_from(classical.len())
        .map_err(|_| Error::invalid_input("composite key", "classical part too large"))?;

    let (head, rest) = out.split_at_mut(PREFIX_LEN);
    let (classical_out, pq_out) = rest.split_at_mut(classical.len());
    head.copy_from_slice(&prefix.to_be_bytes());
    classical_out.copy_from_slice(classical);
    pq_out.copy_from_slice(pq);
    Ok(())
}

/// Encode a composite public key
pub fn encode_public(classical: &[u8], pq: &[u8]) -> Result<Vec<u8>> {
    let mut out = validate::reserve("composite public key", composite_len(classical.len(), pq.len()))?;
    encode_into(&mut out, classical, pq)?;
    Ok(out)
}

/// Encode a composite private key into a zeroize-on-drop buffer
pub fn encode_secret(classical: &[u8], pq: &[u8]) -> Result<SecretVec> {
    let mut out = SecretVec::try_zeroed(composite_len(classical.len(), pq.len()))?;
    encode_into(out.as_mut_slice(), classical, pq)?;
    Ok(out)
}

/// Split a composite key into its classical and post-quantum halves
///
/// The prefix must name exactly `classical_len`, the length the registry
/// declares for the curve.
pub fn decode(bytes: &[u8], classical_len: usize) -> Result<(&[u8], &[u8])> {
    if bytes.len() < PREFIX_LEN + classical_len {
        return Err(Error::MismatchedLength {
            context: "composite key",
            expected: PREFIX_LEN + classical_len,
            actual: bytes.len(),
        });
    }

    let (head, rest) = bytes.split_at(PREFIX_LEN);
    let mut prefix = [0u8; PREFIX_LEN];
    prefix.copy_from_slice(head);
    let declared = u32::from_be_bytes(prefix) as usize;
    validate::length("composite classical prefix", declared, classical_len)?;

    Ok(rest.split_at(classical_len))
}
