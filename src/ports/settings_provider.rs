//! SettingsProvider port - Named settings owned by the host.

/// Setting holding the destination URL (credentials may be embedded).
pub const EXPORT_URL_SETTING: &str = "dnpmexport_url";

/// Setting selecting the payload policy (`full` or `narrowed`).
pub const PAYLOAD_POLICY_SETTING: &str = "dnpmexport_payload_policy";

/// Port for reading string settings by name.
///
/// Only consulted while wiring the exporter; the resulting settings are
/// passed to the components explicitly.
pub trait SettingsProvider: Send + Sync {
    /// Value of the setting, or `None` if it is not set.
    fn setting(&self, name: &str) -> Option<String>;
}
