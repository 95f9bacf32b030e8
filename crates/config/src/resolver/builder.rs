//! Configuration resolver builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigResolver` that turns the environment
//!   into a `ResolvedConfig`.
//! - Validate the application mode against the supported set.
//! - Refuse to run while the deprecated rc file is present.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Parsing the rc file (delegated to legacy.rs).
//! - Loading settings modules (see `source` and `merge` modules).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - The rc file check runs before any environment variable is read.
//! - `resolve()` takes `&self` and reads the environment afresh on every call,
//!   so one resolver serves every reload.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::env::EnvValues;
use super::legacy::ensure_no_rc_file;
use crate::constants::{DEFAULT_SETTINGS_DIR, ENV_DOTENV_DISABLED, RC_FILENAME};
use crate::error::ConfigError;
use crate::fetch::redact_url;
use crate::types::{AppMode, ResolvedConfig};

/// Resolves the load cycle's configuration from overrides and the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    mode: Option<String>,
    settings_dir: Option<PathBuf>,
    git_repo: Option<String>,
    git_subdir: Option<PathBuf>,
    rc_path: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override `APP_MODE`. Validated by `resolve()`, like the env value.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Override `SETTINGS_DIR`.
    pub fn with_settings_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.settings_dir = Some(dir.into());
        self
    }

    /// Override `GIT_SETTINGS_REPO`.
    pub fn with_git_repo(mut self, repo: impl Into<String>) -> Self {
        self.git_repo = Some(repo.into());
        self
    }

    /// Override `GIT_SETTINGS_SUBDIR`.
    pub fn with_git_subdir(mut self, subdir: impl Into<PathBuf>) -> Self {
        self.git_subdir = Some(subdir.into());
        self
    }

    /// Look for the deprecated rc file somewhere other than `./.convergerc`.
    pub fn with_rc_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.rc_path = Some(path.into());
        self
    }

    /// Location checked for the deprecated rc file.
    pub fn rc_path(&self) -> &Path {
        self.rc_path.as_deref().unwrap_or(Path::new(RC_FILENAME))
    }

    /// Resolve the configuration for one load cycle.
    ///
    /// # Errors
    ///
    /// - `ConfigError::DeprecatedRcFile` if the rc file exists, regardless of
    ///   environment state.
    /// - `ConfigError::UnsupportedMode` if the mode is outside the supported set.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        ensure_no_rc_file(self.rc_path())?;

        let env = EnvValues::read();

        let mode = match self.mode.clone().or(env.mode) {
            Some(raw) => validate_mode(&raw)?,
            None => AppMode::default(),
        };
        info!("APP will run in [{mode}] mode");

        let settings_dir = self
            .settings_dir
            .clone()
            .or(env.settings_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_DIR));
        let git_repo = self.git_repo.clone().or(env.git_repo);
        let git_subdir = self.git_subdir.clone().or(env.git_subdir);

        let repo_display = git_repo
            .as_deref()
            .map(redact_url)
            .unwrap_or_else(|| "-".to_string());
        let subdir_display = git_subdir
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        info!(
            settings_dir = %settings_dir.display(),
            git_repo = %repo_display,
            git_subdir = %subdir_display,
            "resolved settings configuration"
        );

        Ok(ResolvedConfig {
            mode,
            settings_dir,
            git_repo,
            git_subdir,
        })
    }
}

/// Parse `raw` into a supported mode, logging the offending value on failure.
pub fn validate_mode(raw: &str) -> Result<AppMode, ConfigError> {
    raw.parse::<AppMode>().inspect_err(|_| {
        error!(
            "unsupported mode: {raw} not in {}",
            AppMode::allowed_display()
        );
    })
}
