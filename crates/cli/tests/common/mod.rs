//! Shared test utilities for converge integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a scratch workspace with a `settings` directory.
//!
//! Invariants / Assumptions:
//! - Every command runs inside its own temporary directory, so the default
//!   `settings` directory and `.convergerc` lookup never touch the repo.
//! - Recognized settings variables are cleared to ensure no leakage from the host.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SETTINGS_VARS: [&str; 4] = [
    "APP_MODE",
    "SETTINGS_DIR",
    "GIT_SETTINGS_REPO",
    "GIT_SETTINGS_SUBDIR",
];

/// Returns a hermetic `converge` command running in `workdir`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Settings variables and `RUST_LOG` are cleared.
pub fn converge_cmd(workdir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("converge");
    cmd.current_dir(workdir);

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for var in SETTINGS_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");

    cmd
}

/// A temporary working directory with an empty `settings` subdirectory.
pub struct Workspace {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("settings")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn settings_dir(&self) -> PathBuf {
        self.dir.path().join("settings")
    }

    /// Write `<logical>_settings.toml` into the settings directory.
    pub fn module(&self, logical: &str, body: &str) -> &Self {
        fs::write(
            self.settings_dir().join(format!("{logical}_settings.toml")),
            body,
        )
        .unwrap();
        self
    }

    pub fn cmd(&self) -> Command {
        converge_cmd(self.path())
    }
}
