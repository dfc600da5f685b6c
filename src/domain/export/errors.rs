//! Errors raised while reading export settings.

use thiserror::Error;

/// Misconfiguration of the export destination or payload policy.
///
/// These are deployment problems: retrying the same export will fail the
/// same way until the settings are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Export destination is not configured ({setting})")]
    MissingDestination { setting: String },

    #[error("Invalid export URI: {reason}")]
    InvalidUri { reason: String },

    #[error("Unsupported URI scheme '{scheme}', expected http or https")]
    UnsupportedScheme { scheme: String },

    #[error("Unknown payload policy '{value}', expected 'full' or 'narrowed'")]
    InvalidPolicy { value: String },
}

impl ConfigurationError {
    /// Creates a missing destination error for the given setting name.
    pub fn missing_destination(setting: impl Into<String>) -> Self {
        ConfigurationError::MissingDestination {
            setting: setting.into(),
        }
    }

    /// Creates an invalid URI error.
    pub fn invalid_uri(reason: impl Into<String>) -> Self {
        ConfigurationError::InvalidUri {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_destination_names_the_setting() {
        let err = ConfigurationError::missing_destination("dnpmexport_url");
        assert_eq!(
            err.to_string(),
            "Export destination is not configured (dnpmexport_url)"
        );
    }
}
