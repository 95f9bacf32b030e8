//! Process-wide default settings instance.
//!
//! Built on first access from the environment alone. A failed first load is
//! reported to the caller and retried on the next access.

use serde_json::Value;
use std::sync::OnceLock;

use super::Settings;
use crate::error::ConfigError;

static GLOBAL: OnceLock<Settings> = OnceLock::new();

fn instance() -> &'static Settings {
    GLOBAL.get_or_init(|| Settings::builder().build())
}

/// The global settings, loaded if no cycle has succeeded yet.
pub fn global() -> Result<&'static Settings, ConfigError> {
    let settings = instance();
    settings.ensure_loaded()?;
    Ok(settings)
}

/// Look up `key` in the global settings.
pub fn get(key: &str) -> Result<Option<Value>, ConfigError> {
    Ok(global()?.get(key))
}

/// Re-run the global pipeline.
pub fn reload() -> Result<(), ConfigError> {
    instance().reload()
}
