//! Environment variable tests for the configuration resolver.
//!
//! Responsibilities:
//! - Test defaults when no variable is set.
//! - Test that every recognized variable is picked up.
//! - Test mode validation and builder override precedence.

use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

use super::{absent_rc, hermetic_vars};
use crate::error::ConfigError;
use crate::resolver::ConfigResolver;
use crate::types::AppMode;

#[test]
#[serial]
fn test_defaults_without_env() {
    let dir = TempDir::new().unwrap();
    temp_env::with_vars(hermetic_vars(&[]), || {
        let resolved = ConfigResolver::new()
            .with_rc_path(absent_rc(&dir))
            .resolve()
            .unwrap();
        assert_eq!(resolved.mode, AppMode::Dev);
        assert_eq!(resolved.settings_dir, PathBuf::from("settings"));
        assert!(resolved.git_repo.is_none());
        assert!(resolved.git_subdir.is_none());
    });
}

#[test]
#[serial]
fn test_all_recognized_vars_are_read() {
    let dir = TempDir::new().unwrap();
    let vars = hermetic_vars(&[
        ("APP_MODE", "prod"),
        ("SETTINGS_DIR", "fortest/server1"),
        ("GIT_SETTINGS_REPO", "/srv/settings-repo"),
        ("GIT_SETTINGS_SUBDIR", "myapp1"),
    ]);
    temp_env::with_vars(vars, || {
        let resolved = ConfigResolver::new()
            .with_rc_path(absent_rc(&dir))
            .resolve()
            .unwrap();
        assert_eq!(resolved.mode, AppMode::Prod);
        assert_eq!(resolved.settings_dir, PathBuf::from("fortest/server1"));
        assert_eq!(resolved.git_repo.as_deref(), Some("/srv/settings-repo"));
        assert_eq!(resolved.git_subdir, Some(PathBuf::from("myapp1")));
    });
}

#[test]
#[serial]
fn test_every_supported_mode_is_accepted() {
    let dir = TempDir::new().unwrap();
    for mode in AppMode::ALL {
        temp_env::with_vars(hermetic_vars(&[("APP_MODE", mode.as_str())]), || {
            let resolved = ConfigResolver::new()
                .with_rc_path(absent_rc(&dir))
                .resolve()
                .unwrap();
            assert_eq!(resolved.mode, mode);
        });
    }
}

#[test]
#[serial]
fn test_unsupported_mode_is_rejected() {
    let dir = TempDir::new().unwrap();
    temp_env::with_vars(hermetic_vars(&[("APP_MODE", "qa")]), || {
        let err = ConfigResolver::new()
            .with_rc_path(absent_rc(&dir))
            .resolve()
            .unwrap_err();
        match err {
            ConfigError::UnsupportedMode { value, allowed } => {
                assert_eq!(value, "qa");
                assert_eq!(allowed, "(prod, test, dev, staging, beta)");
            }
            other => panic!("expected UnsupportedMode, got {other}"),
        }
    });
}

#[test]
#[serial]
fn test_whitespace_only_vars_keep_defaults() {
    let dir = TempDir::new().unwrap();
    let vars = hermetic_vars(&[("APP_MODE", "   "), ("SETTINGS_DIR", "")]);
    temp_env::with_vars(vars, || {
        let resolved = ConfigResolver::new()
            .with_rc_path(absent_rc(&dir))
            .resolve()
            .unwrap();
        assert_eq!(resolved.mode, AppMode::Dev);
        assert_eq!(resolved.settings_dir, PathBuf::from("settings"));
    });
}

#[test]
#[serial]
fn test_builder_overrides_take_precedence_over_env() {
    let dir = TempDir::new().unwrap();
    let vars = hermetic_vars(&[("APP_MODE", "prod"), ("SETTINGS_DIR", "settings/site1")]);
    temp_env::with_vars(vars, || {
        let resolved = ConfigResolver::new()
            .with_rc_path(absent_rc(&dir))
            .with_mode("staging")
            .with_settings_dir("settings/site2")
            .with_git_repo("https://git.example.com/settings.git")
            .resolve()
            .unwrap();
        assert_eq!(resolved.mode, AppMode::Staging);
        assert_eq!(resolved.settings_dir, PathBuf::from("settings/site2"));
        assert_eq!(
            resolved.git_repo.as_deref(),
            Some("https://git.example.com/settings.git")
        );
    });
}

#[test]
#[serial]
fn test_invalid_builder_mode_is_rejected() {
    let dir = TempDir::new().unwrap();
    temp_env::with_vars(hermetic_vars(&[("APP_MODE", "prod")]), || {
        let result = ConfigResolver::new()
            .with_rc_path(absent_rc(&dir))
            .with_mode("PROD")
            .resolve();
        assert!(matches!(result, Err(ConfigError::UnsupportedMode { .. })));
    });
}

#[test]
#[serial]
fn test_resolve_reads_env_afresh_each_call() {
    let dir = TempDir::new().unwrap();
    let resolver = ConfigResolver::new().with_rc_path(absent_rc(&dir));

    temp_env::with_vars(hermetic_vars(&[("SETTINGS_DIR", "settings/site1")]), || {
        let resolved = resolver.resolve().unwrap();
        assert_eq!(resolved.settings_dir, PathBuf::from("settings/site1"));
    });
    temp_env::with_vars(hermetic_vars(&[("SETTINGS_DIR", "settings/site2")]), || {
        let resolved = resolver.resolve().unwrap();
        assert_eq!(resolved.settings_dir, PathBuf::from("settings/site2"));
    });
}
