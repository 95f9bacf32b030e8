//! Settings module loading.
//!
//! Responsibilities:
//! - Define the `SettingsSource` seam: load a logical name into a mapping.
//! - Apply the per-tier failure policy (`load_tier`): skip or fail.
//! - Keep only public keys (not starting with `_`).
//!
//! Does NOT handle:
//! - Tier ordering or merging (see `merge`).
//! - Fetching modules from a remote repository (see `fetch`).
//!
//! Invariants:
//! - A non-fatal load never returns an error; failures become an empty
//!   mapping plus a warning.
//! - Sources report absence as `NotFound`, never as an error.

mod directory;
mod memory;

pub use directory::DirectorySource;
pub use memory::MemorySource;

use tracing::{error, info, warn};

use crate::error::ConfigError;
use crate::namespace::Mapping;
use crate::types::module_name;

/// Result of asking a source for one module.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceOutcome {
    /// The module exists and parsed; holds every top-level key.
    Found(Mapping),
    /// No module exists for the logical name.
    NotFound,
    /// The module exists but could not be read or parsed.
    ParseError(String),
}

/// A place settings modules are loaded from.
pub trait SettingsSource: Send + Sync {
    /// Load the module for `logical_name` (e.g. `default`, `prod`, `site`).
    fn load(&self, logical_name: &str) -> SourceOutcome;

    /// Human-readable location of the module, for diagnostics.
    fn location(&self, logical_name: &str) -> String {
        module_name(logical_name)
    }
}

/// Load one tier, applying the failure policy.
///
/// With `fatal == false` a missing or broken module logs a warning and
/// contributes nothing. With `fatal == true` it logs an error and returns
/// `ConfigError::LoadFailure`.
pub fn load_tier(
    source: &dyn SettingsSource,
    logical_name: &str,
    fatal: bool,
) -> Result<Mapping, ConfigError> {
    let module = module_name(logical_name);
    let detail = match source.load(logical_name) {
        SourceOutcome::Found(mapping) => {
            info!("successfully imported: {module}");
            return Ok(public_only(mapping));
        }
        SourceOutcome::NotFound => "module not found".to_string(),
        SourceOutcome::ParseError(detail) => detail,
    };

    let location = source.location(logical_name);
    if fatal {
        error!("Could not import \"{location}\": {detail}");
        return Err(ConfigError::LoadFailure { module, detail });
    }
    warn!("Could not import \"{location}\": {detail}");
    Ok(Mapping::new())
}

fn public_only(mapping: Mapping) -> Mapping {
    mapping
        .into_iter()
        .filter(|(key, _)| !key.starts_with('_'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_found_module_drops_private_keys() {
        let source = MemorySource::new().with_module(
            "default",
            [
                ("config", json!("default")),
                ("_private", json!(1)),
                ("__dunder", json!(2)),
            ],
        );
        let mapping = load_tier(&source, "default", false).unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("config"), Some(&json!("default")));
    }

    #[test]
    fn test_missing_module_is_skipped_when_not_fatal() {
        let source = MemorySource::new();
        let mapping = load_tier(&source, "site", false).unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_broken_module_is_skipped_when_not_fatal() {
        let source = MemorySource::new().with_broken("dev", "expected `=`");
        let mapping = load_tier(&source, "dev", false).unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_missing_module_fails_when_fatal() {
        let source = MemorySource::new();
        match load_tier(&source, "default", true) {
            Err(ConfigError::LoadFailure { module, detail }) => {
                assert_eq!(module, "default_settings");
                assert_eq!(detail, "module not found");
            }
            other => panic!("expected LoadFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_broken_module_fails_when_fatal() {
        let source = MemorySource::new().with_broken("prod", "invalid table header");
        let err = load_tier(&source, "prod", true).unwrap_err();
        assert!(err.to_string().contains("invalid table header"), "{err}");
    }
}
