//! Converge CLI - inspect layered application settings from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Install logging and seed the environment from `.env`.
//! - Run the selected command and turn its outcome into an exit code.
//!
//! Does NOT handle:
//! - Settings resolution or merging (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can set `APP_MODE` and friends.
//! - Logs go to stderr; stdout carries only command output.
//! - Every failure prints a single `ERROR:` line and exits non-zero.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use converge_settings::ConfigResolver;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so settings variables can come from it
    if let Err(e) = ConfigResolver::new().load_dotenv() {
        eprintln!("ERROR: {e}");
        std::process::exit(ExitCode::from(&e).as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
