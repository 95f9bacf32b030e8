//! Environment variable reading for the resolver.
//!
//! Responsibilities:
//! - Read the recognized variables into an `EnvValues` snapshot.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Mode validation or defaults (see builder.rs).
//! - .env file loading (handled by ConfigResolver::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Each snapshot reads the process environment afresh.

use std::path::PathBuf;

use crate::constants::{
    ENV_APP_MODE, ENV_GIT_SETTINGS_REPO, ENV_GIT_SETTINGS_SUBDIR, ENV_SETTINGS_DIR,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Raw values of the recognized variables. Nothing is validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct EnvValues {
    pub mode: Option<String>,
    pub settings_dir: Option<PathBuf>,
    pub git_repo: Option<String>,
    pub git_subdir: Option<PathBuf>,
}

impl EnvValues {
    pub(crate) fn read() -> Self {
        Self {
            mode: env_var_or_none(ENV_APP_MODE),
            settings_dir: env_var_or_none(ENV_SETTINGS_DIR).map(PathBuf::from),
            git_repo: env_var_or_none(ENV_GIT_SETTINGS_REPO),
            git_subdir: env_var_or_none(ENV_GIT_SETTINGS_SUBDIR).map(PathBuf::from),
        }
    }
}
