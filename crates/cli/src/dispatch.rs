//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the `Settings` handle from the global flags.
//! - Route parsed CLI arguments to the appropriate command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).
//!
//! Invariants:
//! - Commands are routed based on the top-level Commands enum variant.
//! - `resolve` never touches the settings directory.

use anyhow::Result;
use converge_settings::Settings;

use crate::args::{Cli, Commands};
use crate::commands;

/// Build the settings handle described by the global flags.
fn build_settings(cli: &Cli) -> Settings {
    let mut builder = Settings::builder().with_resolver(cli.resolver());
    for tier in &cli.require {
        builder = builder.require_tier((*tier).into());
    }
    builder.build()
}

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Show { output } => {
            let settings = build_settings(&cli);
            commands::show::run(&settings, output)?;
        }
        Commands::Get { key, default } => {
            let settings = build_settings(&cli);
            commands::get::run(&settings, key, default.as_deref())?;
        }
        Commands::Resolve { output } => {
            commands::resolve::run(&cli.resolver(), output)?;
        }
    }

    Ok(())
}
