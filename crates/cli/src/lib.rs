//! # Roster CLI
//!
//! The interactive shell and the console it talks through.

pub mod interactive;
pub mod logging;
pub mod menu;
pub mod terminal;
