//! AES-256-GCM sealing with a per-call random nonce.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CryptoError, Result};

/// Key length in bytes (256-bit key).
pub const KEY_LEN: usize = 32;

/// Nonce length in bytes (96-bit GCM nonce).
pub const NONCE_LEN: usize = 12;

/// Authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// A 256-bit symmetric key shared with the gateway.
///
/// The key bytes are zeroized on drop and never printed by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Generate a new random key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse from the hex form the gateway issues keys in.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
        let arr: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| CryptoError::InvalidKey(format!("expected 32 bytes, got {}", b.len())))?;
        Ok(Self(arr))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Hex encoding of the key.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Seal a plaintext into an opaque payload.
    ///
    /// A fresh random nonce is drawn on every call; reusing a nonce under
    /// the same key would void confidentiality. Output layout:
    /// `nonce || ciphertext || tag`.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Aes256Gcm::new_from_slice(&self.0)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;

        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        // The AEAD API returns ciphertext with the tag appended.
        let sealed = cipher
            .encrypt(nonce, plaintext)
            .map_err(|_| CryptoError::Encryption)?;

        let mut payload = Vec::with_capacity(NONCE_LEN + sealed.len());
        payload.extend_from_slice(&nonce_bytes);
        payload.extend_from_slice(&sealed);
        Ok(payload)
    }

    /// Open a sealed payload, verifying the tag before releasing any bytes.
    ///
    /// Fails closed: a wrong key, a flipped bit anywhere in the payload, or
    /// a truncated payload all return an error and no plaintext.
    pub fn open(&self, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() < NONCE_LEN + TAG_LEN {
            return Err(CryptoError::Malformed("payload shorter than nonce and tag"));
        }

        let cipher = Aes256Gcm::new_from_slice(&self.0)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;

        let (nonce_bytes, sealed) = payload.split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce_bytes);

        cipher
            .decrypt(nonce, sealed)
            .map_err(|_| CryptoError::Authentication)
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_open_roundtrip() {
        let key = SecretKey::generate();
        let plaintext = b"hello, gateway!";

        let payload = key.seal(plaintext).unwrap();
        assert_eq!(payload.len(), NONCE_LEN + plaintext.len() + TAG_LEN);

        let opened = key.open(&payload).unwrap();
        assert_eq!(opened, plaintext);
    }

    #[test]
    fn test_wrong_key_fails() {
        let key1 = SecretKey::generate();
        let key2 = SecretKey::generate();

        let payload = key1.seal(b"secret").unwrap();

        assert!(matches!(
            key2.open(&payload),
            Err(CryptoError::Authentication)
        ));
    }

    #[test]
    fn test_nonce_is_fresh_per_seal() {
        let key = SecretKey::generate();
        let plaintext = b"same plaintext";

        let a = key.seal(plaintext).unwrap();
        let b = key.seal(plaintext).unwrap();

        assert_ne!(a, b);
        // Nonce and ciphertext regions must each differ on their own.
        assert_ne!(a[..NONCE_LEN], b[..NONCE_LEN]);
        assert_ne!(a[NONCE_LEN..], b[NONCE_LEN..]);
    }

    #[test]
    fn test_tamper_detection_every_region() {
        let key = SecretKey::generate();
        let payload = key.seal(b"tamper target").unwrap();

        // Flip one bit in the nonce, ciphertext, and tag regions.
        for index in [0, NONCE_LEN, payload.len() - 1] {
            let mut tampered = payload.clone();
            tampered[index] ^= 0x01;
            assert!(
                matches!(key.open(&tampered), Err(CryptoError::Authentication)),
                "bit flip at byte {index} was not detected"
            );
        }
    }

    #[test]
    fn test_truncated_payload_fails() {
        let key = SecretKey::generate();
        let payload = key.seal(b"truncate me").unwrap();

        // Dropping the last byte leaves a structurally valid but corrupt payload.
        assert!(key.open(&payload[..payload.len() - 1]).is_err());

        // Below nonce + tag the structure itself is invalid.
        assert!(matches!(
            key.open(&payload[..NONCE_LEN + TAG_LEN - 1]),
            Err(CryptoError::Malformed(_))
        ));
        assert!(matches!(key.open(&[]), Err(CryptoError::Malformed(_))));
    }

    #[test]
    fn test_empty_plaintext_roundtrip() {
        let key = SecretKey::generate();
        let payload = key.seal(b"").unwrap();
        assert_eq!(payload.len(), NONCE_LEN + TAG_LEN);
        assert_eq!(key.open(&payload).unwrap(), b"");
    }

    #[test]
    fn test_key_hex_roundtrip() {
        let key = SecretKey::generate();
        let recovered = SecretKey::from_hex(&key.to_hex()).unwrap();
        assert_eq!(recovered.as_bytes(), key.as_bytes());
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(
            SecretKey::from_hex("not hex"),
            Err(CryptoError::InvalidKey(_))
        ));
        // Valid hex, wrong length.
        assert!(matches!(
            SecretKey::from_hex("deadbeef"),
            Err(CryptoError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = SecretKey::from_bytes([0xab; KEY_LEN]);
        let debug = format!("{:?}", key);
        assert_eq!(debug, "SecretKey(..)");
        assert!(!debug.contains("ab"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn roundtrip_any_plaintext(plaintext in proptest::collection::vec(any::<u8>(), 0..512)) {
                let key = SecretKey::generate();
                let payload = key.seal(&plaintext).unwrap();
                prop_assert_eq!(key.open(&payload).unwrap(), plaintext);
            }

            #[test]
            fn corrupt_byte_never_decrypts(
                plaintext in proptest::collection::vec(any::<u8>(), 1..128),
                index in any::<prop::sample::Index>(),
                xor in 1u8..,
            ) {
                let key = SecretKey::generate();
                let mut payload = key.seal(&plaintext).unwrap();
                let i = index.index(payload.len());
                payload[i] ^= xor;
                prop_assert!(key.open(&payload).is_err());
            }
        }
    }
}
