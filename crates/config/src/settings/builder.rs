//! Builder for [`Settings`].

use std::sync::{Mutex, RwLock};

use super::{Settings, SourceFactory};
use crate::merge::{MergeEngine, ReloadPolicy};
use crate::namespace::Namespace;
use crate::resolver::ConfigResolver;
use crate::source::{DirectorySource, SettingsSource};
use crate::types::{ResolvedConfig, TierKind};

/// Configures how a [`Settings`] handle resolves and loads its modules.
///
/// Defaults: environment-only resolution, modules read from the resolved
/// settings directory, every tier optional, additive reloads.
pub struct SettingsBuilder {
    resolver: ConfigResolver,
    source_factory: SourceFactory,
    engine: MergeEngine,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            resolver: ConfigResolver::new(),
            source_factory: Box::new(|resolved: &ResolvedConfig| {
                Box::new(DirectorySource::new(Some(resolved.settings_dir.clone())))
                    as Box<dyn SettingsSource>
            }),
            engine: MergeEngine::new(),
        }
    }

    /// Use `resolver` (with its overrides) instead of a bare environment resolver.
    pub fn with_resolver(mut self, resolver: ConfigResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Load modules from the source built by `factory` for each cycle.
    pub fn with_source_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&ResolvedConfig) -> Box<dyn SettingsSource> + Send + Sync + 'static,
    {
        self.source_factory = Box::new(factory);
        self
    }

    /// Make a load cycle fail when the `kind` tier cannot be loaded.
    pub fn require_tier(mut self, kind: TierKind) -> Self {
        self.engine = self.engine.require_tier(kind);
        self
    }

    pub fn reload_policy(mut self, policy: ReloadPolicy) -> Self {
        self.engine = self.engine.with_policy(policy);
        self
    }

    /// Build the handle. Nothing is loaded until [`Settings::load`].
    pub fn build(self) -> Settings {
        Settings {
            resolver: self.resolver,
            source_factory: self.source_factory,
            engine: self.engine,
            cycle: Mutex::new(()),
            namespace: RwLock::new(Namespace::new()),
            state: RwLock::default(),
            resolved: RwLock::new(None),
        }
    }
}
