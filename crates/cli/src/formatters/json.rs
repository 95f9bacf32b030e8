//! JSON formatter implementation.

use anyhow::Result;
use converge_settings::fetch::redact_url;
use converge_settings::{Namespace, ResolvedConfig};
use serde_json::json;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_namespace(&self, namespace: &Namespace) -> Result<String> {
        Ok(serde_json::to_string_pretty(namespace)?)
    }

    fn format_resolved(&self, resolved: &ResolvedConfig) -> Result<String> {
        let value = json!({
            "mode": resolved.mode,
            "settings_dir": resolved.settings_dir,
            "git_repo": resolved.git_repo.as_deref().map(redact_url),
            "git_subdir": resolved.git_subdir,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}
