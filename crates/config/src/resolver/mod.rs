//! Configuration resolver for environment variables.
//!
//! Responsibilities:
//! - Turn environment variables (and builder overrides) into a `ResolvedConfig`.
//! - Reject the deprecated `.convergerc` file with a migration hint.
//! - Optionally seed the environment from a `.env` file.
//!
//! Does NOT handle:
//! - Fetching remote settings (see `fetch`).
//! - Loading or merging settings modules (see `source` and `merge`).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - Unset variables keep their defaults: mode `dev`, directory `settings`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod legacy;

#[cfg(test)]
mod tests;

pub use builder::{ConfigResolver, validate_mode};
pub use env::env_var_or_none;
pub use legacy::{Directive, parse_directives};
