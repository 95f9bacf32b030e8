//! Filesystem settings source.
//!
//! A module for logical name `X` is the file `X_settings.toml` or
//! `X_settings.json` in the base directory (or the working directory when no
//! base is given). TOML is preferred when both exist.

use serde_json::Value;
use std::path::PathBuf;

use super::{SettingsSource, SourceOutcome};
use crate::constants::MODULE_EXTENSIONS;
use crate::namespace::Mapping;
use crate::types::module_name;

#[derive(Debug, Clone, Default)]
pub struct DirectorySource {
    base_dir: Option<PathBuf>,
}

impl DirectorySource {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    fn candidates(&self, logical_name: &str) -> impl Iterator<Item = PathBuf> + '_ {
        let stem = module_name(logical_name);
        MODULE_EXTENSIONS.iter().map(move |ext| {
            let file_name = format!("{stem}.{ext}");
            match &self.base_dir {
                Some(dir) => dir.join(file_name),
                None => PathBuf::from(file_name),
            }
        })
    }
}

impl SettingsSource for DirectorySource {
    fn load(&self, logical_name: &str) -> SourceOutcome {
        let Some(path) = self.candidates(logical_name).find(|p| p.is_file()) else {
            return SourceOutcome::NotFound;
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => return SourceOutcome::ParseError(e.to_string()),
        };

        let parsed = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => parse_json_module(&content),
            _ => parse_toml_module(&content),
        };
        match parsed {
            Ok(mapping) => SourceOutcome::Found(mapping),
            Err(detail) => SourceOutcome::ParseError(detail),
        }
    }

    fn location(&self, logical_name: &str) -> String {
        self.candidates(logical_name)
            .find(|p| p.is_file())
            .or_else(|| self.candidates(logical_name).next())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| module_name(logical_name))
    }
}

fn parse_toml_module(content: &str) -> Result<Mapping, String> {
    let table: toml::Table = toml::from_str(content).map_err(|e| e.to_string())?;
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect())
}

fn parse_json_module(content: &str) -> Result<Mapping, String> {
    match serde_json::from_str::<Value>(content).map_err(|e| e.to_string())? {
        Value::Object(object) => Ok(object.into_iter().collect()),
        other => Err(format!(
            "top-level value must be an object, found {}",
            json_kind(&other)
        )),
    }
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
