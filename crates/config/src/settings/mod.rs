//! Bootstrap and reload controller.
//!
//! Responsibilities:
//! - Run a load cycle: resolve, fetch (only when a repository is configured),
//!   check the settings directory, merge.
//! - Track the cycle's progress as a `LoadState`.
//! - Expose read access to the merged namespace.
//!
//! Does NOT handle:
//! - Environment parsing (see `resolver`).
//! - Tier ordering (see `merge`).
//! - Process termination; every failure is returned to the caller.
//!
//! Invariants:
//! - `load()` and `reload()` are the same full pipeline.
//! - At most one cycle runs at a time (`cycle` mutex).
//! - Readers see either the previous namespace or the new one, never a mix.
//! - The settings directory is checked before any module is loaded.

mod builder;
mod global;


pub use builder::SettingsBuilder;
pub use global::{get, global, reload};

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};
use tracing::{error, info};

use crate::error::ConfigError;
use crate::fetch::fetch_settings;
use crate::merge::MergeEngine;
use crate::namespace::Namespace;
use crate::resolver::ConfigResolver;
use crate::source::SettingsSource;
use crate::types::ResolvedConfig;

/// Builds the module source for a resolved configuration.
pub(crate) type SourceFactory =
    Box<dyn Fn(&ResolvedConfig) -> Box<dyn SettingsSource> + Send + Sync>;

/// Progress of the most recent load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Resolving,
    Fetching,
    Merging,
    Loaded,
    Failed,
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoadState::Unloaded => "unloaded",
            LoadState::Resolving => "resolving",
            LoadState::Fetching => "fetching",
            LoadState::Merging => "merging",
            LoadState::Loaded => "loaded",
            LoadState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Handle to a merged settings namespace and the pipeline that fills it.
pub struct Settings {
    resolver: ConfigResolver,
    source_factory: SourceFactory,
    engine: MergeEngine,
    cycle: Mutex<()>,
    namespace: RwLock<Namespace>,
    state: RwLock<LoadState>,
    resolved: RwLock<Option<ResolvedConfig>>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("resolver", &self.resolver)
            .field("engine", &self.engine)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// Run the initial load cycle.
    ///
    /// # Errors
    ///
    /// Any fatal error of the pipeline: an unsupported mode, the deprecated
    /// rc file, a failed fetch, a missing settings directory, or a failed
    /// mandatory tier. The namespace keeps its previous contents.
    pub fn load(&self) -> Result<(), ConfigError> {
        let guard = lock(&self.cycle);
        self.run_cycle(&guard)
    }

    /// Re-run the full pipeline, re-reading the environment.
    pub fn reload(&self) -> Result<(), ConfigError> {
        info!("reloading settings");
        let guard = lock(&self.cycle);
        self.run_cycle(&guard)
    }

    /// Load unless the last cycle already succeeded.
    pub fn ensure_loaded(&self) -> Result<(), ConfigError> {
        let guard = lock(&self.cycle);
        if self.state() == LoadState::Loaded {
            return Ok(());
        }
        self.run_cycle(&guard)
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        read(&self.namespace).get(key).cloned()
    }

    pub fn get_or(&self, key: &str, default: Value) -> Value {
        read(&self.namespace).get_or(key, default)
    }

    /// Deserialize the value under `key` into `T`; `Ok(None)` when absent.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, serde_json::Error> {
        read(&self.namespace).get_as(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        read(&self.namespace).contains_key(key)
    }

    /// Sorted list of every key currently set.
    pub fn keys(&self) -> Vec<String> {
        read(&self.namespace).keys().map(str::to_string).collect()
    }

    /// Copy of the whole namespace.
    pub fn snapshot(&self) -> Namespace {
        read(&self.namespace).clone()
    }

    pub fn state(&self) -> LoadState {
        *read(&self.state)
    }

    /// Configuration of the last successful cycle.
    pub fn resolved(&self) -> Option<ResolvedConfig> {
        read(&self.resolved).clone()
    }

    fn run_cycle(&self, _cycle: &MutexGuard<'_, ()>) -> Result<(), ConfigError> {
        let result = self.pipeline();
        let outcome = if result.is_ok() {
            LoadState::Loaded
        } else {
            LoadState::Failed
        };
        self.set_state(outcome);
        result
    }

    fn pipeline(&self) -> Result<(), ConfigError> {
        self.set_state(LoadState::Resolving);
        let resolved = self.resolver.resolve()?;

        if let Some(repo) = &resolved.git_repo {
            self.set_state(LoadState::Fetching);
            let copied = fetch_settings(
                repo,
                resolved.git_subdir.as_deref(),
                &resolved.settings_dir,
            )?;
            info!(modules = copied.len(), "fetched settings modules");
        }

        ensure_settings_dir(&resolved.settings_dir)?;

        self.set_state(LoadState::Merging);
        let source = (self.source_factory)(&resolved);
        let mut staged = self.snapshot();
        self.engine.merge(&resolved, source.as_ref(), &mut staged)?;

        *write(&self.namespace) = staged;
        *write(&self.resolved) = Some(resolved);
        Ok(())
    }

    fn set_state(&self, state: LoadState) {
        *write(&self.state) = state;
    }
}

fn ensure_settings_dir(path: &Path) -> Result<(), ConfigError> {
    if path.is_dir() {
        return Ok(());
    }
    error!("no such directory: {}", path.display());
    Err(ConfigError::MissingDirectory {
        path: path.to_path_buf(),
    })
}

// Writes are single assignments, so a poisoned lock still guards consistent data.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
