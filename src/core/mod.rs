//! Core building blocks for liftoff
//!
//! - **config**: release configuration discovery, parsing and serialization
//! - **error**: error types with contextual help messages and exit codes

pub mod config;
pub mod error;
