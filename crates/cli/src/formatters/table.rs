//! Table formatter implementation.
//!
//! Two left-aligned columns, keys sorted, one row per setting.

use anyhow::Result;
use converge_settings::fetch::redact_url;
use converge_settings::{Namespace, ResolvedConfig};

use crate::formatters::{Formatter, format_json_value};

/// Table formatter.
pub struct TableFormatter;

fn render_rows(header: (&str, &str), rows: &[(String, String)]) -> String {
    let width = rows
        .iter()
        .map(|(k, _)| k.len())
        .chain(std::iter::once(header.0.len()))
        .max()
        .unwrap_or(0);

    let mut output = format!("{:<width$}  {}\n", header.0, header.1);
    for (key, value) in rows {
        output.push_str(&format!("{key:<width$}  {value}\n"));
    }
    output
}

impl Formatter for TableFormatter {
    fn format_namespace(&self, namespace: &Namespace) -> Result<String> {
        if namespace.is_empty() {
            return Ok("No settings loaded.\n".to_string());
        }
        let rows: Vec<(String, String)> = namespace
            .iter()
            .map(|(k, v)| (k.to_string(), format_json_value(v)))
            .collect();
        Ok(render_rows(("KEY", "VALUE"), &rows))
    }

    fn format_resolved(&self, resolved: &ResolvedConfig) -> Result<String> {
        let rows = vec![
            ("mode".to_string(), resolved.mode.to_string()),
            (
                "settings_dir".to_string(),
                resolved.settings_dir.display().to_string(),
            ),
            (
                "git_repo".to_string(),
                resolved.git_repo.as_deref().map(redact_url).unwrap_or_default(),
            ),
            (
                "git_subdir".to_string(),
                resolved
                    .git_subdir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
        ];
        Ok(render_rows(("FIELD", "VALUE"), &rows))
    }
}
