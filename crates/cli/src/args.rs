//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn global flags into resolver overrides and merge options.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read settings variables itself; unset flags fall through to the
//!   environment inside the resolver.

use clap::{Parser, Subcommand, ValueEnum};
use converge_settings::{ConfigResolver, TierKind};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "converge")]
#[command(about = "Converge - layered settings for deployable applications", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  converge show\n  APP_MODE=prod converge show --output json\n  converge --settings-dir ./conf get DATABASE_URL\n  converge --git-repo https://git.example.com/settings.git --git-subdir myapp resolve\n"
)]
pub struct Cli {
    /// Application mode (prod, test, dev, staging, beta). Overrides APP_MODE.
    #[arg(short, long, global = true)]
    pub mode: Option<String>,

    /// Directory holding the *_settings modules. Overrides SETTINGS_DIR.
    #[arg(short, long, global = true, value_name = "DIR")]
    pub settings_dir: Option<PathBuf>,

    /// Git repository to bootstrap the settings directory from. Overrides GIT_SETTINGS_REPO.
    #[arg(long, global = true, value_name = "URL")]
    pub git_repo: Option<String>,

    /// Subdirectory of the repository holding the modules. Overrides GIT_SETTINGS_SUBDIR.
    #[arg(long, global = true, value_name = "PATH")]
    pub git_subdir: Option<PathBuf>,

    /// Fail when this tier's module cannot be loaded (repeatable).
    #[arg(long = "require", global = true, value_enum, value_name = "TIER")]
    pub require: Vec<TierArg>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolver carrying every override given on the command line.
    pub fn resolver(&self) -> ConfigResolver {
        let mut resolver = ConfigResolver::new();
        if let Some(mode) = &self.mode {
            resolver = resolver.with_mode(mode.clone());
        }
        if let Some(dir) = &self.settings_dir {
            resolver = resolver.with_settings_dir(dir.clone());
        }
        if let Some(repo) = &self.git_repo {
            resolver = resolver.with_git_repo(repo.clone());
        }
        if let Some(subdir) = &self.git_subdir {
            resolver = resolver.with_git_subdir(subdir.clone());
        }
        resolver
    }
}

/// A tier name accepted by `--require`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TierArg {
    Default,
    Mode,
    Site,
}

impl From<TierArg> for TierKind {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Default => TierKind::Default,
            TierArg::Mode => TierKind::Mode,
            TierArg::Site => TierKind::Site,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the settings and print every key
    Show {
        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Load the settings and print one value as JSON
    Get {
        /// Key to look up
        key: String,

        /// Printed when the key is missing (parsed as JSON, else taken as a string)
        #[arg(long, value_name = "VALUE")]
        default: Option<String>,
    },

    /// Print the resolved configuration without loading any module
    Resolve {
        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_require_is_repeatable() {
        let cli = Cli::try_parse_from([
            "converge", "--require", "default", "--require", "site", "show",
        ])
        .unwrap();
        assert_eq!(cli.require, [TierArg::Default, TierArg::Site]);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["converge", "get", "KEY", "--mode", "prod"]).unwrap();
        assert_eq!(cli.mode.as_deref(), Some("prod"));
        assert!(matches!(cli.command, Commands::Get { ref key, .. } if key == "KEY"));
    }

    #[test]
    fn test_reload_policy_is_not_a_cli_flag() {
        // Every invocation runs a single load cycle, so only the library exposes the policy.
        assert!(Cli::try_parse_from(["converge", "--clean-reload", "show"]).is_err());
    }

    #[test]
    fn test_unknown_tier_is_rejected() {
        assert!(Cli::try_parse_from(["converge", "--require", "prod", "show"]).is_err());
    }
}
