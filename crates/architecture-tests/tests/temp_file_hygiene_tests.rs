//! Purpose: Enforce deterministic temp file cleanup patterns in tests.
//!
//! Ensures all temp file creation uses the tempfile crate's RAII types
//! rather than std::env::temp_dir() with manual cleanup.
//!
//! Non-scope: Files are analyzed statically; runtime behavior is not checked.
//!
//! Invariants:
//! - Test code must use the tempfile crate for temp file management.
//! - No hardcoded /tmp paths allowed in tests.
//! - Temp directories are always bound to a named variable.

mod common;

use std::fs;

fn test_sources() -> Vec<(String, String)> {
    let root = common::workspace_root();
    common::rust_files(&root.join("crates"))
        .into_iter()
        .filter_map(|path| {
            let content = fs::read_to_string(&path).ok()?;
            content
                .contains("#[test]")
                .then(|| (path.display().to_string(), content))
        })
        .collect()
}

#[test]
fn test_no_manual_temp_dir_usage() {
    let mut violations: Vec<String> = Vec::new();

    for (path, content) in test_sources() {
        if content.contains("std::env::temp_dir()") {
            violations.push(format!(
                "{path}: uses std::env::temp_dir() - prefer tempfile::TempDir for RAII cleanup"
            ));
        }
        if content.contains("\"/tmp") || content.contains("'/tmp") {
            violations.push(format!(
                "{path}: contains hardcoded /tmp path - prefer tempfile crate"
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Found manual temp file patterns (not panic-safe):\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tempdir_bindings_retained() {
    let mut violations: Vec<String> = Vec::new();

    for (path, content) in test_sources() {
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("let _ = TempDir::new()")
                || trimmed.starts_with("let _ = tempfile::")
            {
                violations.push(format!(
                    "{}:{}: TempDir bound to `_` is deleted immediately - use a named variable",
                    path,
                    i + 1
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found tempfile instances not properly retained:\n{}",
        violations.join("\n")
    );
}
