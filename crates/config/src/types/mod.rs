//! Configuration type definitions for converge.
//!
//! Responsibilities:
//! - Define the application mode, the resolved configuration record, and tiers.
//!
//! Does NOT handle:
//! - Reading environment variables (see `resolver` module).
//! - Loading or merging settings modules (see `source` and `merge` modules).
//!
//! Invariants:
//! - `AppMode` is a closed set; unknown names never construct a value.
//! - Tier order is fixed: default, mode, site.

mod mode;
mod resolved;
mod tier;

pub use mode::AppMode;
pub use resolved::ResolvedConfig;
pub use tier::{Tier, TierKind, module_name};
