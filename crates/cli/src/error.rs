//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants (and CLI-level failures) to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Every variant of `ConfigError` maps to exactly one exit code.
//! - Errors without a recognized cause exit with `GeneralError`.

use converge_settings::ConfigError;
use thiserror::Error;

/// Structured exit codes for converge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Validation error - unsupported mode, deprecated rc file, broken `.env`.
    ///
    /// Scripts should fix the environment and not retry unchanged.
    ValidationError = 2,

    /// The settings directory does not exist.
    DirectoryError = 3,

    /// A mandatory settings module or a requested key is missing.
    NotFound = 4,

    /// Cloning or copying the settings repository failed.
    ///
    /// Scripts may retry; the remote may be temporarily unreachable.
    FetchError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::UnsupportedMode { .. }
            | ConfigError::DeprecatedRcFile { .. }
            | ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::ValidationError,
            ConfigError::MissingDirectory { .. } => ExitCode::DirectoryError,
            ConfigError::LoadFailure { .. } => ExitCode::NotFound,
            ConfigError::Fetch { .. } => ExitCode::FetchError,
        }
    }
}

/// `get` was asked for a key that no tier defines.
#[derive(Debug, Error)]
#[error("no such setting: {key}")]
pub struct KeyNotFound {
    pub key: String,
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no cause in the chain is recognized.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.is::<KeyNotFound>() {
                return ExitCode::NotFound;
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ValidationError.as_i32(), 2);
        assert_eq!(ExitCode::DirectoryError.as_i32(), 3);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
        assert_eq!(ExitCode::FetchError.as_i32(), 5);
    }

    #[test]
    fn test_validation_errors() {
        let err = ConfigError::UnsupportedMode {
            value: "qa".to_string(),
            allowed: "(prod, test, dev, staging, beta)".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);

        let err = ConfigError::DeprecatedRcFile {
            path: PathBuf::from(".convergerc"),
            hint: String::new(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
        assert_eq!(
            ExitCode::from(&ConfigError::DotenvParse { error_index: 3 }),
            ExitCode::ValidationError
        );
    }

    #[test]
    fn test_missing_directory() {
        let err = ConfigError::MissingDirectory {
            path: PathBuf::from("settings"),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::DirectoryError);
    }

    #[test]
    fn test_load_failure_and_fetch() {
        let err = ConfigError::LoadFailure {
            module: "site_settings".to_string(),
            detail: "module not found".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);

        let err = ConfigError::Fetch {
            operation: "git clone repo".to_string(),
            detail: "unreachable".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::FetchError);
    }

    #[test]
    fn test_anyhow_chain_is_searched() {
        let err: anyhow::Error = Err::<(), _>(ConfigError::MissingDirectory {
            path: PathBuf::from("settings"),
        })
        .context("Failed to load settings")
        .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::DirectoryError);

        let err = anyhow::Error::new(KeyNotFound {
            key: "PORT".to_string(),
        });
        assert_eq!(err.exit_code(), ExitCode::NotFound);

        assert_eq!(anyhow::anyhow!("boom").exit_code(), ExitCode::GeneralError);
    }
}
