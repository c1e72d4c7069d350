//! Opaque access tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

use tollbit_crypto::{CryptoError, SecretKey};

use crate::error::{Result, TokenError};
use crate::request::AccessRequest;

/// An opaque, authenticated-encrypted token authorizing one content lookup.
///
/// The string form is lowercase hex over `nonce || ciphertext || tag` (see
/// `tollbit-crypto` for the layout). A token's only legitimate consumers
/// are a gateway holding the same key and [`Token::open`].
///
/// The newtype exists so a raw string cannot be passed where a token is
/// required; no validation happens until the token is opened.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Seal an access request into a token under `key`.
    ///
    /// The request is rendered to its canonical JSON form, sealed, and
    /// hex-encoded. Randomness enters only through the cipher's nonce, so
    /// issuing the same request twice yields two distinct tokens.
    pub fn issue(request: &AccessRequest, key: &SecretKey) -> Result<Self> {
        let plaintext = serde_json::to_vec(request).map_err(TokenError::Encode)?;
        let sealed = key.seal(&plaintext)?;
        Ok(Self(hex::encode(sealed)))
    }

    /// Decrypt and validate a token back into its access request.
    ///
    /// The tag is verified before any plaintext is interpreted; a token
    /// sealed under a different key, tampered with, or not hex at all never
    /// yields a request.
    pub fn open(&self, key: &SecretKey) -> Result<AccessRequest> {
        let sealed =
            hex::decode(&self.0).map_err(|_| CryptoError::Malformed("token is not valid hex"))?;
        let plaintext = key.open(&sealed)?;
        serde_json::from_slice(&plaintext).map_err(TokenError::Decode)
    }

    /// Get the raw token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
