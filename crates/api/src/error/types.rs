//! Error type definitions for key-management operations

use thiserror::Error as ThisError;

/// Primary error type for key-management operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The algorithm name is not registered for the requested key class
    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    /// Memory for key material could not be obtained
    #[error("{context}: allocation failed")]
    AllocationFailure { context: &'static str },

    /// Operation invoked on an absent key handle or an absent key part
    #[error("{context}: key is null")]
    NullKey { context: &'static str },

    /// Malformed or wrong-typed parameter
    #[error("{context}: {message}")]
    InvalidInput {
        context: &'static str,
        message: String,
    },

    /// The underlying primitive reported a failure
    #[error("key generation failed for {algorithm}: {message}")]
    GenerationFailure {
        algorithm: String,
        message: String,
    },

    /// Buffer length differs from the algorithm's declared size
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    MismatchedLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Result type for key-management operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::InvalidInput`]
    pub fn invalid_input(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::UnknownAlgorithm`]
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }

    /// Shorthand for an [`Error::GenerationFailure`]
    pub fn generation(algorithm: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GenerationFailure {
            algorithm: algorithm.into(),
            message: message.into(),
        }
    }

    /// Replace the static context of an error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::AllocationFailure { .. } => Self::AllocationFailure { context },
            Self::NullKey { .. } => Self::NullKey { context },
            Self::InvalidInput { message, .. } => Self::InvalidInput { context, message },
            Self::MismatchedLength { expected, actual, .. } => Self::MismatchedLength {
                context,
                expected,
                actual,
            },
            other => other,
        }
    }
}
