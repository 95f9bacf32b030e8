//! CLI command implementations.

pub mod get;
pub mod resolve;
pub mod show;
