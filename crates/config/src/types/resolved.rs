//! The resolved configuration record for one load cycle.

use serde::Serialize;
use std::path::PathBuf;

use crate::constants::DEFAULT_SETTINGS_DIR;
use crate::types::mode::AppMode;

/// Where settings come from for a single load cycle.
///
/// Built by [`crate::ConfigResolver::resolve`] and discarded once the cycle
/// finishes; a reload resolves a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    /// Selects the middle tier.
    pub mode: AppMode,
    /// Directory holding the `*_settings` modules.
    pub settings_dir: PathBuf,
    /// Git repository (URL or local path) to bootstrap the directory from.
    pub git_repo: Option<String>,
    /// Subdirectory of the repository holding the modules.
    pub git_subdir: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            mode: AppMode::default(),
            settings_dir: PathBuf::from(DEFAULT_SETTINGS_DIR),
            git_repo: None,
            git_subdir: None,
        }
    }
}
