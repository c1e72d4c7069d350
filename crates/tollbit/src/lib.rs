//! # Tollbit
//!
//! Client for the Tollbit paid-content gateway.
//!
//! ## Overview
//!
//! Tollbit sells web content at a per-page rate. A client mints a
//! self-contained, encrypted access token naming the target URL and the
//! price it will accept, then exchanges that token at the gateway for the
//! content and the rate that applied:
//!
//! - **Token**: an opaque hex string sealing an [`AccessRequest`] under a
//!   256-bit key shared with the gateway (AES-256-GCM, fresh nonce per
//!   token)
//! - **Content lookup**: authenticated by the token, returns the page body
//!   and its rate
//! - **Rate lookup**: unauthenticated price check for a URL
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tollbit::{ClientConfig, Currency, SecretKey, TollbitClient};
//!
//! async fn example() {
//!     let key = SecretKey::from_hex("...").unwrap();
//!     let config = ClientConfig::new(key, "org123", "newsreader");
//!     let client = TollbitClient::new(config);
//!
//!     // Price check, then fetch at up to $1.50.
//!     let rate = client.rate("https://www.example.com/a").await.unwrap();
//!     assert!(!rate.is_error());
//!
//!     let result = client
//!         .content("https://www.example.com/a", 1_500_000, Currency::Usd)
//!         .await
//!         .unwrap();
//!     println!("{}", result.content);
//! }
//! ```
//!
//! Tokens can also be minted offline with
//! [`TollbitClient::generate_token`] and redeemed later with
//! [`TollbitClient::content_with_token`].
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `tollbit::core` - Data model and token codec
//! - `tollbit::crypto` - AES-256-GCM token sealing

pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod transport;

// Re-export component crates
pub use tollbit_core as core;
pub use tollbit_crypto as crypto;

// Re-export main types for convenience
pub use client::{ClientConfig, TollbitClient};
pub use error::{ClientError, Result};
pub use http::HttpTransport;
pub use transport::{Transport, TransportError};

// Re-export commonly used core types
pub use tollbit_core::{AccessRequest, ContentResult, Currency, OrgId, RateInfo, Token};
pub use tollbit_crypto::SecretKey;
