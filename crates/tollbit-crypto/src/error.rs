//! Error types for token sealing.

use thiserror::Error;

/// Errors that can occur while sealing or opening a payload.
///
/// Every variant is an authentication failure from the caller's point of
/// view: the payload cannot be trusted and no plaintext is released.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key material is not a valid 256-bit key.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Payload does not have the expected structure.
    #[error("malformed payload: {0}")]
    Malformed(&'static str),

    /// The authentication tag did not verify.
    #[error("authentication failed")]
    Authentication,

    /// The cipher rejected the plaintext.
    #[error("encryption failed")]
    Encryption,
}

/// Result type for sealing operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
