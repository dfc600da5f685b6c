//! Static Settings - Map-backed SettingsProvider.

use std::collections::HashMap;

use crate::ports::SettingsProvider;

/// Settings held in a plain map.
#[derive(Debug, Clone, Default)]
pub struct StaticSettings {
    values: HashMap<String, String>,
}

impl StaticSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a setting.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl SettingsProvider for StaticSettings {
    fn setting(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
