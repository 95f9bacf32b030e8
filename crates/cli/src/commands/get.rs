//! Get command implementation.

use anyhow::{Context, Result};
use converge_settings::Settings;
use serde_json::Value;

use crate::error::KeyNotFound;

pub fn run(settings: &Settings, key: &str, default: Option<&str>) -> Result<()> {
    settings.load().context("Failed to load settings")?;

    let value = match (settings.get(key), default) {
        (Some(value), _) => value,
        (None, Some(raw)) => parse_default(raw),
        (None, None) => {
            return Err(KeyNotFound {
                key: key.to_string(),
            }
            .into());
        }
    };

    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}

/// `--default` values are JSON when they parse as JSON, strings otherwise.
fn parse_default(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
