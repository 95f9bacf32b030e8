//! In-memory settings source.
//!
//! Serves modules from a map instead of the filesystem, and records every
//! logical name it was asked for so callers can check load order.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{SettingsSource, SourceOutcome};
use crate::namespace::Mapping;

#[derive(Debug, Default)]
pub struct MemorySource {
    modules: HashMap<String, SourceOutcome>,
    requests: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `pairs` as the module for `logical_name`.
    pub fn with_module<K, I>(mut self, logical_name: &str, pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mapping: Mapping = pairs.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.modules
            .insert(logical_name.to_string(), SourceOutcome::Found(mapping));
        self
    }

    /// Make `logical_name` fail to parse with `detail`.
    pub fn with_broken(mut self, logical_name: &str, detail: &str) -> Self {
        self.modules.insert(
            logical_name.to_string(),
            SourceOutcome::ParseError(detail.to_string()),
        );
        self
    }

    /// Logical names requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl SettingsSource for MemorySource {
    fn load(&self, logical_name: &str) -> SourceOutcome {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(logical_name.to_string());
        }
        self.modules
            .get(logical_name)
            .cloned()
            .unwrap_or(SourceOutcome::NotFound)
    }

    fn location(&self, logical_name: &str) -> String {
        format!("memory:{}", crate::types::module_name(logical_name))
    }
}
