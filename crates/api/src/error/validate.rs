//! Validation helpers that turn a failed check into a typed error

use super::{Error, Result};

/// Validate that `actual` equals the declared length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::MismatchedLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a parameter condition
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_input(context, message));
    }
    Ok(())
}

/// Unwrap an optional key handle or key part, reporting a null key otherwise
pub fn present<T>(value: Option<T>, context: &'static str) -> Result<T> {
    value.ok_or(Error::NullKey { context })
}

/// Reserve exactly `len` bytes, reporting allocation failure instead of aborting
pub fn reserve(context: &'static str, len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure { context })?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Copy a string, reporting allocation failure instead of aborting
pub fn owned_str(context: &'static str, value: &str) -> Result<String> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(value.len())
        .map_err(|_| Error::AllocationFailure { context })?;
    owned.push_str(value);
    Ok(owned)
}
