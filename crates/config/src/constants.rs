//! Centralized constants for the converge workspace.
//!
//! Environment variable names, file naming conventions, and defaults shared by
//! the resolver, the module loader, and the CLI.

// =============================================================================
// Environment Variables
// =============================================================================

/// Selects the application mode (see [`crate::AppMode`]).
pub const ENV_APP_MODE: &str = "APP_MODE";

/// Directory holding the `*_settings` modules.
pub const ENV_SETTINGS_DIR: &str = "SETTINGS_DIR";

/// Optional git repository to bootstrap the settings directory from.
pub const ENV_GIT_SETTINGS_REPO: &str = "GIT_SETTINGS_REPO";

/// Optional subdirectory of the git repository holding the modules.
pub const ENV_GIT_SETTINGS_SUBDIR: &str = "GIT_SETTINGS_SUBDIR";

/// When `1` or `true`, `.env` files are never loaded.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

/// Every variable the resolver recognizes, in documentation order.
pub const RECOGNIZED_VARS: [&str; 4] = [
    ENV_APP_MODE,
    ENV_SETTINGS_DIR,
    ENV_GIT_SETTINGS_REPO,
    ENV_GIT_SETTINGS_SUBDIR,
];

// =============================================================================
// Defaults & Naming
// =============================================================================

/// Settings directory used when `SETTINGS_DIR` is unset.
pub const DEFAULT_SETTINGS_DIR: &str = "settings";

/// Deprecated directive file. Its presence is a fatal error.
pub const RC_FILENAME: &str = ".convergerc";

/// Suffix appended to a logical name to form a module identifier.
pub const MODULE_SUFFIX: &str = "_settings";

/// Supported module file extensions, in lookup order.
pub const MODULE_EXTENSIONS: [&str; 2] = ["toml", "json"];

/// Namespace key under which the resolved mode is published.
pub const MODE_KEY: &str = "APP_MODE";

/// Logical name of the first tier.
pub const DEFAULT_TIER_NAME: &str = "default";

/// Logical name of the last tier.
pub const SITE_TIER_NAME: &str = "site";
