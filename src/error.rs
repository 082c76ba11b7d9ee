//! Error types for hash-append.
//!
//! Dispatch itself is infallible; errors only arise when building
//! accumulators from user-supplied configuration or key material.

use thiserror::Error;

/// Errors that can occur while constructing accumulators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    /// Algorithm name did not match any known accumulator
    #[error("unknown hash algorithm: {0:?} (expected one of: blake3, fx, sip)")]
    UnknownAlgorithm(String),

    /// Key material has the wrong length for a keyed accumulator
    #[error("invalid key length: expected {expected} bytes, found {found}")]
    InvalidKeyLength {
        /// Required key length in bytes
        expected: usize,
        /// Length of the key that was supplied
        found: usize,
    },

    /// Configuration combination cannot be built
    #[error("invalid accumulator config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for accumulator construction.
pub type HashResult<T> = Result<T, HashError>;

impl HashError {
    /// Create an invalid-config error with a message.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an unknown-algorithm error from the rejected name.
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm(name.into())
    }
}
