//! Tests for the configuration resolver.
//!
//! Responsibilities:
//! - Test environment variable handling, defaults, and override precedence.
//! - Test mode validation.
//! - Test the deprecated rc file check.
//! - Test dotenv loading behavior.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests that change the working directory also take `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

pub mod env_tests;

pub use crate::test_util::hermetic_vars;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// An rc path inside `dir` that does not exist.
pub fn absent_rc(dir: &TempDir) -> PathBuf {
    dir.path().join(".convergerc")
}
