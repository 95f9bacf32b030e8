//! Tier identifiers and module naming.

use std::fmt;

use crate::constants::{DEFAULT_TIER_NAME, MODULE_SUFFIX, SITE_TIER_NAME};
use crate::types::mode::AppMode;

/// One of the three ordered settings sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Default,
    Mode(AppMode),
    Site,
}

/// Selects a tier without binding it to a concrete mode.
///
/// Used to mark tiers as mandatory before the mode is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierKind {
    Default,
    Mode,
    Site,
}

impl Tier {
    /// The three tiers for `mode`, in application order.
    pub fn ordered(mode: AppMode) -> [Tier; 3] {
        [Tier::Default, Tier::Mode(mode), Tier::Site]
    }

    /// Logical name used to derive the module identifier.
    pub fn logical_name(&self) -> &'static str {
        match self {
            Tier::Default => DEFAULT_TIER_NAME,
            Tier::Mode(mode) => mode.as_str(),
            Tier::Site => SITE_TIER_NAME,
        }
    }

    pub fn kind(&self) -> TierKind {
        match self {
            Tier::Default => TierKind::Default,
            Tier::Mode(_) => TierKind::Mode,
            Tier::Site => TierKind::Site,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.logical_name())
    }
}

/// Module identifier for a logical name: `default` becomes `default_settings`.
pub fn module_name(logical_name: &str) -> String {
    format!("{logical_name}{MODULE_SUFFIX}")
}
