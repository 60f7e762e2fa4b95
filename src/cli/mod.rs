//! CLI argument parsing for the launcher.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Launcher for the ALTER EGO Discord bot.
///
/// Patches the bot's credentials and settings documents from environment
/// variables, then supervises the bot process, teeing its combined
/// stdout/stderr to the console and an append-only log file.
#[derive(Parser, Debug)]
#[command(name = "ego-launch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for the launcher.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full launch sequence.
    ///
    /// Applies the environment overlay to the config documents, spawns the
    /// bot, relays its output to the console and the log, and exits with
    /// the bot's own exit code.
    Launch(LaunchArgs),

    /// Apply the environment overlay without launching the bot.
    ///
    /// Rewrites credentials.json and settings.json with any matching
    /// DISCORD_TOKEN / G_* / S_* environment variables applied.
    WriteConfig(WriteConfigArgs),

    /// Validate the launcher config and show the overlay mapping table.
    ///
    /// Prints every recognized environment variable, the document path it
    /// targets, and whether it is currently set. Read-only.
    Check(CheckArgs),
}

/// Config file selection and per-path overrides, shared by all commands.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Path to the launcher config file (used when it exists).
    #[arg(long, default_value = "launcher.yaml")]
    pub config: PathBuf,

    /// Override the credentials document path.
    #[arg(long)]
    pub credentials: Option<PathBuf>,

    /// Override the settings document path.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Override the bot log path.
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Override the event log path.
    #[arg(long)]
    pub events: Option<PathBuf>,

    /// Override the bot command line.
    #[arg(long)]
    pub command: Option<String>,
}

/// Arguments for the `launch` command.
#[derive(Args, Debug, Default)]
pub struct LaunchArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the `write-config` command.
#[derive(Args, Debug, Default)]
pub struct WriteConfigArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the `check` command.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}
