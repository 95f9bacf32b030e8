//! Error types for settings resolution, loading, and bootstrap.
//!
//! Responsibilities:
//! - Define error variants for every fatal path of a load cycle.
//! - Keep enough context (values, paths, operations) for a one-line diagnostic.
//!
//! Does NOT handle:
//! - Process termination or exit codes (see the CLI crate).
//! - Recoverable tier failures, which are logged and never surface here
//!   unless the tier is mandatory.
//!
//! Invariants:
//! - Validation and directory errors are produced before any module is loaded.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a settings load cycle.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `APP_MODE` holds a value outside the supported set.
    #[error("unsupported mode: {value} not in {allowed}")]
    UnsupportedMode { value: String, allowed: String },

    /// The legacy rc file exists. Settings must come from environment variables.
    #[error(
        "{} is deprecated and no longer read; remove it and use environment variables instead{hint}",
        path.display()
    )]
    DeprecatedRcFile { path: PathBuf, hint: String },

    /// The configured settings directory does not exist.
    #[error("no such directory: {}", path.display())]
    MissingDirectory { path: PathBuf },

    /// A mandatory tier could not be loaded.
    #[error("could not load \"{module}\": {detail}")]
    LoadFailure { module: String, detail: String },

    /// Cloning or copying the remote settings failed.
    #[error("[{operation}] failed: {detail}")]
    Fetch { operation: String, detail: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Returns true for errors raised while validating the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConfigError::UnsupportedMode { .. }
                | ConfigError::DeprecatedRcFile { .. }
                | ConfigError::DotenvParse { .. }
                | ConfigError::DotenvIo { .. }
                | ConfigError::DotenvUnknown
        )
    }
}
