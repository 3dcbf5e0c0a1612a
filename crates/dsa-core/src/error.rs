//! Error types for DSA operations

use thiserror::Error;

/// Result type alias for DSA operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during DSA setup, signing, and verification
#[derive(Debug, Error)]
pub enum Error {
    /// Signature text line whose numeric suffix does not parse
    #[error("Malformed signature line: {0:?}")]
    MalformedSignature(String),

    /// Domain parameters rejected at construction
    #[error("Invalid domain parameters: {0}")]
    InvalidParameters(String),

    /// Generator search ran out of candidates
    #[error("Generator search exhausted after {0} candidates")]
    GeneratorSearchExhausted(usize),

    /// Signing retries ran out of attempts
    #[error("Signing did not produce a valid signature after {0} attempts")]
    SigningExhausted(usize),
}
