//! Error types for the token codec.

use thiserror::Error;
use tollbit_crypto::CryptoError;

/// Errors that can occur while issuing or opening a token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Cipher-level failure: bad tag, malformed payload, or a key mismatch.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// The access request could not be serialized.
    #[error("encoding access request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The decrypted plaintext is not a well-formed access request.
    #[error("malformed access request: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Result type for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;
