//! Launcher configuration model.
//!
//! This module defines the LaunchConfig struct that names every path and
//! command the launcher touches: the credentials and settings documents,
//! the bot log, the event log, and the bot command line itself. It supports
//! forward-compatible YAML parsing (unknown fields are ignored), defaults
//! matching the original script layout, and validation of config values.

mod model;
mod operations;


// Re-export public API
pub use model::LaunchConfig;
