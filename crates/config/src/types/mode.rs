//! Application mode selector.
//!
//! Responsibilities:
//! - Define the closed set of deployment modes.
//! - Parse and display modes by their lowercase names.
//!
//! Invariants:
//! - Parsing is exact: `"Prod"` and `" prod"` are rejected.
//! - `AppMode::ALL` lists every variant in canonical order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// The deployment environment the application runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    Prod,
    Test,
    #[default]
    Dev,
    Staging,
    Beta,
}

impl AppMode {
    /// Every supported mode, in canonical order.
    pub const ALL: [AppMode; 5] = [
        AppMode::Prod,
        AppMode::Test,
        AppMode::Dev,
        AppMode::Staging,
        AppMode::Beta,
    ];

    /// Lowercase name, which is also the tier's logical name.
    pub const fn as_str(self) -> &'static str {
        match self {
            AppMode::Prod => "prod",
            AppMode::Test => "test",
            AppMode::Dev => "dev",
            AppMode::Staging => "staging",
            AppMode::Beta => "beta",
        }
    }

    /// Render the supported set for diagnostics, e.g. `(prod, test, dev, staging, beta)`.
    pub fn allowed_display() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|m| m.as_str()).collect();
        format!("({})", names.join(", "))
    }
}

impl fmt::Display for AppMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ConfigError::UnsupportedMode {
                value: s.to_string(),
                allowed: Self::allowed_display(),
            })
    }
}
