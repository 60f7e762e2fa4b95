//! Launcher for the ALTER EGO Discord bot.
//!
//! This is the main entry point for the `ego-launch` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and handles
//! errors with proper exit codes. For `launch`, the process exits with the
//! bot's own exit code once the bot terminates.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod overlay;
pub mod supervisor;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
