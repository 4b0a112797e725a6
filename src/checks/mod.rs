//! Configuration lints
//!
//! This module provides a unified interface for validating a loaded release
//! configuration beyond the schema the loader enforces.
//!
//! # Built-in Checks
//!
//! - **branches**: release-branch list is non-empty and duplicate-free
//! - **plugin-pipeline**: pipeline stages have identifiers, no duplicates
//! - **repository-url**: repositoryUrl is plausibly addressable
//! - **repository-access**: remote reachable via `git ls-remote` (thorough only)

mod branches;
mod plugins;
mod repository;
mod runner;
mod trait_def;

// Re-export public API
pub use runner::create_default_runner;
pub use trait_def::{Check, CheckContext, Severity};

// Individual checks are not exported - they're registered in create_default_runner()
