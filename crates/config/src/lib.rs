//! Layered settings management.
//!
//! Settings are merged from three modules in a fixed order: `default`, the
//! active mode (`dev`, `prod`, ...), then `site`. Later tiers win. The
//! environment selects the mode and the settings directory, and may point at
//! a git repository that bootstraps the directory.
//!
//! ```no_run
//! let settings = converge_settings::Settings::builder().build();
//! settings.load()?;
//! let debug = settings.get_or("DEBUG", serde_json::Value::Bool(false));
//! # Ok::<(), converge_settings::ConfigError>(())
//! ```

pub mod constants;
mod error;
pub mod fetch;
mod merge;
mod namespace;
pub mod resolver;
mod settings;
pub mod source;
pub mod types;

pub use error::ConfigError;
pub use fetch::fetch_settings;
pub use merge::{MergeEngine, ReloadPolicy};
pub use namespace::{Mapping, Namespace};
pub use resolver::{ConfigResolver, env_var_or_none};
pub use settings::{LoadState, Settings, SettingsBuilder, get, global, reload};
pub use source::{DirectorySource, MemorySource, SettingsSource, SourceOutcome, load_tier};
pub use types::{AppMode, ResolvedConfig, Tier, TierKind};
