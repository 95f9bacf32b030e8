//! Resolve command implementation.
//!
//! Runs only the resolution step: no clone, no directory check, no module load.

use anyhow::{Context, Result};
use converge_settings::ConfigResolver;

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(resolver: &ConfigResolver, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let resolved = resolver
        .resolve()
        .context("Failed to resolve settings configuration")?;

    let formatter = get_formatter(format);
    print!("{}", formatter.format_resolved(&resolved)?);
    Ok(())
}
