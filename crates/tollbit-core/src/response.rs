//! Gateway response records.
//!
//! Both lookups return a JSON array of records; only element 0 is consumed.
//! Records are schema-checked: unknown or missing fields fail the decode.

use serde::{Deserialize, Serialize};

use crate::types::Currency;

/// A price quote for a single resource.
///
/// Returned standalone by the rate lookup and embedded in every
/// [`ContentResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RateInfo {
    /// Price in micros of `currency`.
    pub price_micros: u64,

    /// Settlement currency.
    pub currency: Currency,

    /// Server-side rate error, empty when the quote is good.
    ///
    /// This is data for the caller, not a protocol failure: a rate lookup
    /// that returns a non-empty `error` is still a successful call.
    pub error: String,
}

impl RateInfo {
    /// Whether the server reported a rate error for this quote.
    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }
}

/// The unit returned by a successful content fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentResult {
    /// Body of the purchased page.
    pub content: String,

    /// The rate that applied to this fetch.
    pub rate: RateInfo,
}
