//! Error types for the Tollbit client.

use thiserror::Error;
use tollbit_core::TokenError;
use tollbit_crypto::CryptoError;

use crate::transport::TransportError;

/// Errors that can occur during client operations.
///
/// One variant per failure kind, so callers can match on what went wrong.
/// Nothing is retried or recovered locally; the first failure surfaces.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The token failed authentication: bad tag, malformed payload, or a
    /// key that does not match this client's.
    #[error("authentication error: {0}")]
    Authentication(#[source] CryptoError),

    /// A token or response decrypted/parsed but is structurally invalid.
    #[error("decode error: {0}")]
    Decode(String),

    /// The gateway returned no usable records.
    #[error("empty result from gateway")]
    EmptyResult,

    /// Network or HTTP failure, propagated unchanged from the transport.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl From<TokenError> for ClientError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Crypto(e) => Self::Authentication(e),
            TokenError::Encode(e) | TokenError::Decode(e) => Self::Decode(e.to_string()),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
