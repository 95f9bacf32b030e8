//! Remote settings bootstrap.
//!
//! Responsibilities:
//! - Clone a settings repository (URL or local path) into a temporary directory.
//! - Copy its `*_settings` modules into the local settings directory.
//!
//! Does NOT handle:
//! - Loading the copied modules (see `source`).
//! - Deciding whether to fetch at all (see `settings`).
//!
//! Invariants:
//! - The clone lives in a `TempDir` and is removed when the fetch returns.
//! - Only regular files named `<name>_settings.<toml|json>` directly inside the
//!   source directory are copied; existing files are overwritten.
//! - Every failure is fatal and names the failing operation.
//! - There is no timeout: a hung clone blocks the caller.

mod git;

pub use git::redact_url;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::{MODULE_EXTENSIONS, MODULE_SUFFIX};
use crate::error::ConfigError;

/// Clone `repo` and copy its settings modules into `settings_dir`.
///
/// `subdir` selects a directory inside the clone; an absolute `subdir`
/// replaces the clone root entirely, following `Path::join`.
///
/// Returns the destination paths of the copied modules, sorted.
pub fn fetch_settings(
    repo: &str,
    subdir: Option<&Path>,
    settings_dir: &Path,
) -> Result<Vec<PathBuf>, ConfigError> {
    if !settings_dir.exists() {
        info!("Creating directory: {}", settings_dir.display());
        fs::create_dir_all(settings_dir).map_err(|e| ConfigError::Fetch {
            operation: format!("mkdir {}", settings_dir.display()),
            detail: e.to_string(),
        })?;
    }

    let workdir = tempfile::TempDir::new().map_err(|e| ConfigError::Fetch {
        operation: "create temporary directory".to_string(),
        detail: e.to_string(),
    })?;

    info!(repo = %redact_url(repo), "cloning settings repository");
    let checkout = git::clone_repository(repo, workdir.path())?;
    let source_dir = match subdir {
        Some(sub) => checkout.join(sub),
        None => checkout,
    };

    copy_settings_modules(&source_dir, settings_dir)
}

/// Copy every settings module directly inside `source_dir` into `dest_dir`.
pub(crate) fn copy_settings_modules(
    source_dir: &Path,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>, ConfigError> {
    let entries = fs::read_dir(source_dir).map_err(|e| ConfigError::Fetch {
        operation: format!("read_dir {}", source_dir.display()),
        detail: e.to_string(),
    })?;

    let mut modules: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_settings_module(path))
        .collect();
    modules.sort();

    let mut copied = Vec::with_capacity(modules.len());
    for src in modules {
        let Some(file_name) = src.file_name() else {
            continue;
        };
        let dst = dest_dir.join(file_name);
        fs::copy(&src, &dst).map_err(|e| ConfigError::Fetch {
            operation: format!("copy {} -> {}", src.display(), dst.display()),
            detail: e.to_string(),
        })?;
        info!("'{}' -> '{}'", src.display(), dst.display());
        copied.push(dst);
    }

    Ok(copied)
}

fn is_settings_module(path: &Path) -> bool {
    let stem_matches = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.len() > MODULE_SUFFIX.len() && stem.ends_with(MODULE_SUFFIX));
    let ext_matches = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| MODULE_EXTENSIONS.contains(&ext));
    stem_matches && ext_matches
}
