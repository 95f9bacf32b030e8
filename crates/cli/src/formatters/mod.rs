//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Parse the `--output` flag.
//! - Render the merged namespace and the resolved configuration.
//!
//! Does NOT handle:
//! - Writing to stdout (callers print the returned string).

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

use anyhow::Result;
use converge_settings::{Namespace, ResolvedConfig};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

pub trait Formatter {
    /// Format every key of the merged namespace.
    fn format_namespace(&self, namespace: &Namespace) -> Result<String>;

    /// Format the configuration a load cycle would use.
    fn format_resolved(&self, resolved: &ResolvedConfig) -> Result<String>;
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

/// Render a value for a table cell: strings bare, everything else as JSON.
pub fn format_json_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => String::new(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            serde_json::to_string(v).unwrap_or_default()
        }
    }
}
