//! Export destination configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::export::{ExportTarget, PayloadPolicy};

/// Export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Destination URL; may carry `user:password@` credentials
    #[serde(default)]
    pub url: Option<SecretString>,

    /// Which sections of the record are sent
    #[serde(default)]
    pub payload_policy: PayloadPolicy,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ExportConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Destination URL, if configured and not blank.
    pub fn url(&self) -> Option<&str> {
        self.url
            .as_ref()
            .map(|url| url.expose_secret().as_str())
            .filter(|url| !url.trim().is_empty())
    }

    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let url = self.url().ok_or(ValidationError::MissingRequired("export.url"))?;
        ExportTarget::parse(url).map_err(|e| ValidationError::InvalidExportUrl(e.to_string()))?;

        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            url: None,
            payload_policy: PayloadPolicy::default(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
