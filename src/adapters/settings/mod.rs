//! SettingsProvider adapters.

mod config_settings;
mod static_settings;

pub use config_settings::ConfigSettings;
pub use static_settings::StaticSettings;
