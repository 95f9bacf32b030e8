//! Deprecated `.convergerc` directive file.
//!
//! The rc file used to hold `KEY = "VALUE"` directives for the recognized
//! variables. It is no longer read: its presence fails the load cycle. The
//! directives it holds are parsed only to tell the operator which `export`
//! lines replace it.

use std::path::Path;

use tracing::{debug, error};

use crate::constants::{ENV_GIT_SETTINGS_REPO, RECOGNIZED_VARS};
use crate::error::ConfigError;
use crate::fetch::redact_url;

/// A recognized `KEY = "VALUE"` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub key: String,
    pub value: String,
}

/// Parse recognized directives, skipping blank, unknown, and malformed lines.
///
/// Values lose one pair of surrounding quotes (`"` or `'`).
pub fn parse_directives(content: &str) -> Vec<Directive> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if !RECOGNIZED_VARS.contains(&key) {
                return None;
            }
            Some(Directive {
                key: key.to_string(),
                value: strip_quotes(value.trim()).to_string(),
            })
        })
        .collect()
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Render `export` suggestions for the directives, or an empty string.
pub(crate) fn migration_hint(directives: &[Directive]) -> String {
    if directives.is_empty() {
        return String::new();
    }
    let mut hint = String::from("; equivalent environment:");
    for directive in directives {
        let value = if directive.key == ENV_GIT_SETTINGS_REPO {
            redact_url(&directive.value)
        } else {
            directive.value.clone()
        };
        hint.push_str(&format!(" export {}={};", directive.key, value));
    }
    hint.pop();
    hint
}

/// Fail if the deprecated rc file exists at `path`.
pub(crate) fn ensure_no_rc_file(path: &Path) -> Result<(), ConfigError> {
    if !path.is_file() {
        debug!(path = %path.display(), "no legacy rc file");
        return Ok(());
    }

    let hint = std::fs::read_to_string(path)
        .map(|content| migration_hint(&parse_directives(&content)))
        .unwrap_or_default();

    error!(path = %path.display(), "deprecated rc file present");
    Err(ConfigError::DeprecatedRcFile {
        path: path.to_path_buf(),
        hint,
    })
}
