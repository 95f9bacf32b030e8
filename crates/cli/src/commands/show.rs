//! Show command implementation.

use anyhow::{Context, Result};
use converge_settings::Settings;
use tracing::info;

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(settings: &Settings, output_format: &str) -> Result<()> {
    // Parse output format first so a typo fails before any fetch
    let format = OutputFormat::from_str(output_format)?;

    settings.load().context("Failed to load settings")?;
    info!(keys = settings.keys().len(), "settings loaded");

    let formatter = get_formatter(format);
    let output = formatter.format_namespace(&settings.snapshot())?;
    print!("{}", output);

    Ok(())
}
