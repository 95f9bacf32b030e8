//! Three-tier override merge.
//!
//! Responsibilities:
//! - Load `default`, `<mode>`, and `site` in that order and apply each to the
//!   namespace, later tiers overwriting earlier ones.
//! - Publish the resolved mode under `APP_MODE`.
//! - Escalate failures of mandatory tiers.
//!
//! Does NOT handle:
//! - Resolving the mode or directory (see `resolver`).
//! - Locking or load state (see `settings`).
//!
//! Invariants:
//! - Exactly three loads per merge, always in tier order, whichever modules exist.
//! - Under `ReloadPolicy::Additive` keys from earlier cycles survive unless a
//!   tier overwrites them. `ReloadPolicy::Clean` starts from an empty namespace.
//! - The target namespace is only replaced after every tier loaded; a failed
//!   mandatory tier leaves it untouched.
//! - `APP_MODE` is written after the tiers, so the resolved mode wins.

use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

use crate::constants::MODE_KEY;
use crate::error::ConfigError;
use crate::namespace::Namespace;
use crate::source::{SettingsSource, load_tier};
use crate::types::{ResolvedConfig, Tier, TierKind};

/// What a reload does with keys left over from the previous cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReloadPolicy {
    /// Merge onto the previous state; stale keys persist.
    #[default]
    Additive,
    /// Clear the namespace before applying the tiers.
    Clean,
}

/// Applies the three tiers to a namespace.
#[derive(Debug, Clone, Default)]
pub struct MergeEngine {
    required: HashSet<TierKind>,
    policy: ReloadPolicy,
}

impl MergeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the merge when `kind`'s module cannot be loaded.
    pub fn require_tier(mut self, kind: TierKind) -> Self {
        self.required.insert(kind);
        self
    }

    pub fn with_policy(mut self, policy: ReloadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn is_required(&self, kind: TierKind) -> bool {
        self.required.contains(&kind)
    }

    /// Merge the tiers selected by `resolved` from `source` into `namespace`.
    pub fn merge(
        &self,
        resolved: &ResolvedConfig,
        source: &dyn SettingsSource,
        namespace: &mut Namespace,
    ) -> Result<(), ConfigError> {
        let mut staged = match self.policy {
            ReloadPolicy::Additive => namespace.clone(),
            ReloadPolicy::Clean => Namespace::new(),
        };

        for tier in Tier::ordered(resolved.mode) {
            let mapping = load_tier(source, tier.logical_name(), self.is_required(tier.kind()))?;
            debug!(tier = %tier, keys = mapping.len(), "applying tier");
            staged.apply(mapping);
        }
        staged.insert(MODE_KEY, Value::String(resolved.mode.to_string()));

        *namespace = staged;
        Ok(())
    }
}
