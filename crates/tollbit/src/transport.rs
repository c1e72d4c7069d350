//! Transport abstraction for gateway lookups.
//!
//! The client depends only on this contract. The default implementation is
//! [`crate::http::HttpTransport`]; tests use [`stub::StubTransport`].

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by a transport implementation.
///
/// Propagated unchanged to the caller; the client never retries.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The gateway answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response body could not be parsed as JSON.
    #[error("invalid response body: {0}")]
    Body(String),
}

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// A single HTTP GET returning the parsed JSON body.
///
/// Implementations must be thread-safe (Send + Sync); the client adds no
/// locking of its own. Timeouts and cancellation are the transport's
/// responsibility.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` with the given request headers and return the body.
    async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<Value>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<Value> {
        (**self).get(url, headers).await
    }
}

/// A canned-response transport for tests.
///
/// Records every request and answers from a fixed queue of outcomes.
pub mod stub {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// One recorded request.
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        /// Full URL the client targeted.
        pub url: String,
        /// Request headers in the order the client supplied them.
        pub headers: Vec<(String, String)>,
    }

    impl RecordedRequest {
        /// Look up a header value by exact name.
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
        }
    }

    /// Transport that replays canned outcomes and records requests.
    pub struct StubTransport {
        outcomes: Mutex<VecDeque<Result<Value>>>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl StubTransport {
        /// A stub that answers the first request with `value`.
        pub fn returning(value: Value) -> Self {
            Self::with_outcomes(vec![Ok(value)])
        }

        /// A stub that fails the first request with `error`.
        pub fn failing(error: TransportError) -> Self {
            Self::with_outcomes(vec![Err(error)])
        }

        /// A stub that replays `outcomes` in order.
        pub fn with_outcomes(outcomes: Vec<Result<Value>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Requests seen so far.
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().map(|r| r.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<Value> {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(RecordedRequest {
                    url: url.to_string(),
                    headers: headers.to_vec(),
                });
            }
            self.outcomes
                .lock()
                .ok()
                .and_then(|mut q| q.pop_front())
                .unwrap_or_else(|| Err(TransportError::Request("stub queue exhausted".into())))
        }
    }
}
