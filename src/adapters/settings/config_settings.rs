//! Config Settings - SettingsProvider backed by the loaded `ExportConfig`.

use crate::config::ExportConfig;
use crate::ports::{SettingsProvider, EXPORT_URL_SETTING, PAYLOAD_POLICY_SETTING};

/// Exposes the environment configuration under the host setting names.
#[derive(Debug, Clone)]
pub struct ConfigSettings {
    config: ExportConfig,
}

impl ConfigSettings {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }
}

impl SettingsProvider for ConfigSettings {
    fn setting(&self, name: &str) -> Option<String> {
        match name {
            EXPORT_URL_SETTING => self.config.url().map(str::to_string),
            PAYLOAD_POLICY_SETTING => Some(self.config.payload_policy.as_str().to_string()),
            _ => None,
        }
    }
}
