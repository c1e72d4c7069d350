//! The gateway client: token minting plus content and rate lookups.

use serde_json::Value;

use tollbit_core::{AccessRequest, ContentResult, Currency, OrgId, RateInfo, Token};
use tollbit_crypto::SecretKey;

use crate::endpoint::{self, HEADER_ORG_CUID, HEADER_TOKEN, HEADER_USER_AGENT};
use crate::error::{ClientError, Result};
use crate::http::HttpTransport;
use crate::transport::Transport;

/// Immutable identity shared by every request a client makes.
///
/// Passed explicitly to the constructor; there is no process-wide state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Symmetric key shared with the gateway.
    pub key: SecretKey,
    /// Organization cuid issued by Tollbit.
    pub org: OrgId,
    /// Name of the calling application, embedded in the user-agent.
    pub agent: String,
}

impl ClientConfig {
    /// Build a config from its three identity fields.
    pub fn new(key: SecretKey, org: impl Into<OrgId>, agent: impl Into<String>) -> Self {
        Self {
            key,
            org: org.into(),
            agent: agent.into(),
        }
    }
}

/// Client for the Tollbit content gateway.
///
/// Holds only immutable identity plus a transport, so a single client may
/// be used from concurrent tasks without locking.
pub struct TollbitClient<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl TollbitClient<HttpTransport> {
    /// Create a client that talks to the gateway over HTTPS.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> TollbitClient<T> {
    /// Create a client with a custom transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Mint a token authorizing one lookup of `url` at up to
    /// `max_price_micros`. No network I/O.
    pub fn generate_token(
        &self,
        url: &str,
        max_price_micros: u64,
        currency: Currency,
    ) -> Result<Token> {
        let request = AccessRequest {
            org_cuid: self.config.org.clone(),
            key: self.config.key.to_hex(),
            url: url.to_string(),
            user_agent: self.config.agent.clone(),
            max_price_micros,
            currency,
        };
        Ok(Token::issue(&request, &self.config.key)?)
    }

    /// Exchange a previously issued token for content and its rate.
    ///
    /// The token is opened with this client's key to recover the org and
    /// target URL; a token sealed under a different key surfaces as an
    /// authentication error. The token itself, not its plaintext, is what
    /// goes to the gateway.
    pub async fn content_with_token(&self, token: &Token) -> Result<ContentResult> {
        let request = token.open(&self.config.key)?;

        let url = endpoint::content_endpoint(&request.url);
        tracing::debug!(endpoint = %url, "content lookup");

        let headers = vec![
            (HEADER_ORG_CUID.to_string(), request.org_cuid.to_string()),
            (
                HEADER_USER_AGENT.to_string(),
                endpoint::user_agent(&self.config.agent),
            ),
            (HEADER_TOKEN.to_string(), token.as_str().to_string()),
        ];

        let body = self.transport.get(&url, &headers).await?;
        let mut results: Vec<ContentResult> = decode_records(body)?;

        if results.is_empty() || results[0].content.is_empty() {
            return Err(ClientError::EmptyResult);
        }
        Ok(results.swap_remove(0))
    }

    /// Mint a token for `url` and immediately exchange it.
    pub async fn content(
        &self,
        url: &str,
        max_price_micros: u64,
        currency: Currency,
    ) -> Result<ContentResult> {
        let token = self.generate_token(url, max_price_micros, currency)?;
        self.content_with_token(&token).await
    }

    /// Look up the rate for `target_url`, unauthenticated.
    ///
    /// A non-empty [`RateInfo::error`] is returned as data, not raised;
    /// callers must check it even on success.
    pub async fn rate(&self, target_url: &str) -> Result<RateInfo> {
        let url = endpoint::rate_endpoint(target_url);
        tracing::debug!(endpoint = %url, "rate lookup");

        let headers = vec![(
            HEADER_USER_AGENT.to_string(),
            endpoint::user_agent(&self.config.agent),
        )];

        let body = self.transport.get(&url, &headers).await?;
        let mut rates: Vec<RateInfo> = decode_records(body)?;

        if rates.is_empty() {
            return Err(ClientError::EmptyResult);
        }
        Ok(rates.swap_remove(0))
    }
}

/// Decode a gateway body as a schema-checked array of records.
fn decode_records<R: serde::de::DeserializeOwned>(body: Value) -> Result<Vec<R>> {
    serde_json::from_value(body).map_err(|e| ClientError::Decode(e.to_string()))
}
