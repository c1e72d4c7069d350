//! # Tollbit Core
//!
//! Data model and token codec for the Tollbit content gateway.
//!
//! This crate defines the records that cross the wire — the access request
//! sealed inside a token and the content/rate records the gateway returns —
//! and the [`Token`] codec that turns an [`AccessRequest`] into an opaque
//! hex token and back. It performs no I/O.
//!
//! ## Key Types
//!
//! - [`AccessRequest`] - The plaintext record sealed inside a token
//! - [`Token`] - Opaque, authenticated-encrypted, hex-encoded token
//! - [`ContentResult`] / [`RateInfo`] - Gateway response records
//!
//! All wire records are schema-checked on decode: missing, extra, or
//! mistyped fields are rejected rather than silently tolerated.

pub mod error;
pub mod request;
pub mod response;
pub mod token;
pub mod types;

pub use error::TokenError;
pub use request::AccessRequest;
pub use response::{ContentResult, RateInfo};
pub use token::Token;
pub use types::{Currency, OrgId};
