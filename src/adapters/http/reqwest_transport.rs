//! Reqwest Transport - ExportTransport over HTTP using reqwest.
//!
//! One shared client per transport; the client pools connections and is safe
//! to use from concurrent exports. Redirects are not followed so that a 3xx
//! answer reaches the dispatcher and is reported as a failed delivery.
//!
//! # Configuration
//!
//! ```ignore
//! let transport = ReqwestTransport::new(Duration::from_secs(30))?;
//! let analyzer = ExportAnalyzer::new(host, records, Arc::new(transport), settings);
//! ```

use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::ports::{ExportTransport, OutboundRequest, TransportFailure, TransportResponse};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport for export requests.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport with its own client.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()?;

        Ok(Self { client, timeout })
    }

    /// Creates a transport around an existing client.
    ///
    /// `timeout` is only used for error reporting; the client's own
    /// timeout applies.
    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn map_error(&self, e: reqwest::Error) -> TransportFailure {
        if e.is_timeout() {
            TransportFailure::Timeout {
                timeout: self.timeout,
            }
        } else if e.is_connect() {
            TransportFailure::Connect(e.to_string())
        } else {
            TransportFailure::Other(e.to_string())
        }
    }
}

#[async_trait]
impl ExportTransport for ReqwestTransport {
    async fn post(&self, request: OutboundRequest) -> Result<TransportResponse, TransportFailure> {
        debug!(url = %request.url, bytes = request.body.len(), "POST export request");

        let mut builder = self.client.post(request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(TransportResponse::new(status, body))
    }
}
