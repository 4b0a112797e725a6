//! CLI commands for liftoff
//!
//! - **init**: scaffold a release configuration for the current repository
//! - **check**: load the configuration and run lints over it
//! - **show**: print the resolved configuration (canonical JSON with --json)
//!
//! The release pipeline itself (commit analysis, changelog, publishing) is
//! executed by the external orchestrator; these commands end at the
//! configuration boundary.

pub mod check;
pub mod init;
pub mod show;

pub use check::run_check;
pub use init::run_init;
pub use show::run_show;
