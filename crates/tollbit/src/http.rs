//! HTTP transport backed by `reqwest`.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;
use std::time::Duration;

use crate::transport::{Result, Transport, TransportError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport that performs real lookups over HTTPS.
///
/// Holds a connection pool; clone-cheap and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Create a transport with the default request timeout.
    pub fn new() -> Self {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| HttpClient::new());
        Self { http }
    }

    /// Create a transport around an existing `reqwest` client, keeping its
    /// timeout and TLS configuration.
    pub fn with_client(http: HttpClient) -> Self {
        Self { http }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<Value> {
        let mut request = self.http.get(url);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}
