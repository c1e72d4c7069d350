//! The access request sealed inside a token.

use serde::{Deserialize, Serialize};

use crate::types::{Currency, OrgId};

/// The plaintext record sealed inside an access token.
///
/// Created fresh per token, never persisted, never mutated. Serialized as a
/// JSON object with the exact field names the gateway validates: `orgCuid`,
/// `key`, `url`, `userAgent`, `maxPriceMicros`, `currency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccessRequest {
    /// Organization cuid of the calling tenant.
    pub org_cuid: OrgId,

    /// Hex encoding of the key the token is sealed with. The gateway
    /// cross-checks it against the key that decrypted the token.
    pub key: String,

    /// The resource the token authorizes, scheme/host/path verbatim as
    /// supplied by the caller.
    pub url: String,

    /// Name of the calling application.
    pub user_agent: String,

    /// Price ceiling the caller will accept, in micros of `currency`.
    pub max_price_micros: u64,

    /// Settlement currency.
    pub currency: Currency,
}
