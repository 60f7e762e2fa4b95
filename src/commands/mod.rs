//! Command implementations for the launcher.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared config-resolution step that merges the
//! optional launcher.yaml with per-flag overrides.

mod check;
mod launch;
mod write_config;

use crate::cli::{Command, ConfigArgs};
use crate::config::LaunchConfig;
use crate::error::Result;
use crate::exit_codes;

/// Dispatch a command to its implementation.
///
/// Returns the process exit code: commands normally return
/// [`exit_codes::SUCCESS`], while `launch` returns the bot's own exit code.
pub fn dispatch(command: Command) -> Result<i32> {
    match command {
        Command::Launch(args) => launch::cmd_launch(args),
        Command::WriteConfig(args) => {
            write_config::cmd_write_config(args)?;
            Ok(exit_codes::SUCCESS)
        }
        Command::Check(args) => {
            check::cmd_check(args)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Resolve the effective launch config: file (or defaults), then overrides.
pub(crate) fn resolve_config(args: &ConfigArgs) -> Result<LaunchConfig> {
    let mut config = LaunchConfig::load_or_default(&args.config)?;

    if let Some(path) = &args.credentials {
        config.credentials_path = path.clone();
    }
    if let Some(path) = &args.settings {
        config.settings_path = path.clone();
    }
    if let Some(path) = &args.log {
        config.log_path = path.clone();
    }
    if let Some(path) = &args.events {
        config.events_path = path.clone();
    }
    if let Some(command) = &args.command {
        config.command = command.clone();
    }

    config.validate()?;
    Ok(config)
}
