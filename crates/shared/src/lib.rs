//! # Roster Shared
//!
//! Error and configuration types used by the roster binaries.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
