//! # Tollbit Crypto
//!
//! AES-256-GCM sealing for Tollbit access tokens.
//!
//! This crate contains no I/O and no knowledge of the token's plaintext
//! schema. It is pure computation: a 256-bit key, a fresh nonce per seal,
//! and an opaque byte payload in and out.
//!
//! ## Sealed payload layout
//!
//! ```text
//! nonce (12 bytes) || ciphertext (plaintext length) || tag (16 bytes)
//! ```
//!
//! This layout is part of the token format contract shared with the gateway;
//! both seal and open use it, and it must not change under a given key.

pub mod cipher;
pub mod error;

pub use cipher::{SecretKey, KEY_LEN, NONCE_LEN, TAG_LEN};
pub use error::{CryptoError, Result};
