//! ExportTransport port - Sends a prepared HTTP POST to the export endpoint.
//!
//! The transport only moves bytes. Building headers and classifying the
//! status code are done by the dispatcher, so every transport behaves the
//! same way towards the caller.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// A fully prepared POST request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    /// Target URL; never carries user-info.
    pub url: Url,
    /// Header name/value pairs, in insertion order.
    pub headers: Vec<(String, String)>,
    /// UTF-8 JSON body.
    pub body: Vec<u8>,
}

impl OutboundRequest {
    pub fn new(url: Url, body: Vec<u8>) -> Self {
        Self {
            url,
            headers: Vec::new(),
            body,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First header value with the given name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Response of the remote system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, Error)]
pub enum TransportFailure {
    #[error("Request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request failed: {0}")]
    Other(String),
}

/// Port for issuing the HTTP POST.
#[async_trait]
pub trait ExportTransport: Send + Sync {
    async fn post(&self, request: OutboundRequest) -> Result<TransportResponse, TransportFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ExportTransport) {}

    #[test]
    fn success_is_2xx_only() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(202, "").is_success());
        assert!(TransportResponse::new(299, "").is_success());
        assert!(!TransportResponse::new(199, "").is_success());
        assert!(!TransportResponse::new(300, "").is_success());
        assert!(!TransportResponse::new(500, "").is_success());
    }

    #[test]
    fn timeout_message_keeps_sub_second_precision() {
        let failure = TransportFailure::Timeout {
            timeout: Duration::from_millis(250),
        };
        assert_eq!(failure.to_string(), "Request timed out after 250ms");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let request = OutboundRequest::new(Url::parse("http://host/export").unwrap(), vec![])
            .with_header("Content-Type", "application/json; charset=utf-8");

        assert_eq!(
            request.header("content-type"),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(request.header("authorization"), None);
    }
}
