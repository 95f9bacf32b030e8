//! The merged settings namespace.
//!
//! Responsibilities:
//! - Hold merged key/value settings with deterministic ordering.
//! - Apply a tier's mapping with last-writer-wins semantics.
//! - Offer lookup helpers (`get`, `get_or`, typed `get_as`).
//!
//! Does NOT handle:
//! - Deciding tier order (see `merge`).
//! - Synchronization (see `settings`, which wraps it in a lock).
//!
//! Invariants:
//! - `apply` only inserts or overwrites; it never removes keys.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

/// Flat key/value mapping produced by loading one settings module.
pub type Mapping = BTreeMap<String, Value>;

/// Mutable store of merged settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Namespace {
    values: Mapping,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Look up `key`, falling back to `default` when absent.
    pub fn get_or(&self, key: &str, default: Value) -> Value {
        self.values.get(key).cloned().unwrap_or(default)
    }

    /// Deserialize the value under `key` into `T`.
    ///
    /// Returns `Ok(None)` when the key is absent and an error when the stored
    /// value does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, serde_json::Error> {
        self.values
            .get(key)
            .map(|value| T::deserialize(value))
            .transpose()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Set a single key, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(key.into(), value)
    }

    /// Copy every pair of `mapping` in, overwriting existing keys.
    pub fn apply(&mut self, mapping: Mapping) {
        self.values.extend(mapping);
    }
}

impl From<Mapping> for Namespace {
    fn from(values: Mapping) -> Self {
        Self { values }
    }
}
