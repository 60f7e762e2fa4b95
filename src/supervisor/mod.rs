//! Bot process supervision.
//!
//! The supervisor owns the full launch sequence: apply the environment
//! overlay, open the bot log, spawn the bot with stderr merged into stdout,
//! relay the combined output line-by-line to the console and the log, and
//! wait for the bot to exit.
//!
//! The bot's stdout and stderr are bound to the write end of a single
//! anonymous pipe, so the combined stream interleaves in the order the OS
//! delivers it, and the relay stays single-threaded. There is no timeout
//! and no restart policy: a bot that hangs keeps the supervisor blocked,
//! and a bot that crashes surfaces through the propagated exit code.

pub mod relay;


use crate::config::LaunchConfig;
use crate::error::{LauncherError, Result};
use crate::events::{Event, EventAction, EventLog};
use crate::overlay::ConfigWriter;
use relay::CancelToken;
use serde_json::json;
use std::io::BufReader;
use std::process::Command;

/// Outcome of a completed supervision run.
#[derive(Debug)]
pub struct RunOutcome {
    /// The bot's exit code. A signal-killed bot reports as 1.
    pub exit_code: i32,
    /// Number of output lines relayed to the console and log.
    pub lines_relayed: u64,
}

/// Runs the launch sequence described by a [`LaunchConfig`].
pub struct Supervisor {
    config: LaunchConfig,
    events: EventLog,
    cancel: CancelToken,
}

impl Supervisor {
    pub fn new(config: LaunchConfig) -> Self {
        let events = EventLog::new(&config.events_path);
        Self {
            config,
            events,
            cancel: CancelToken::new(),
        }
    }

    /// Token that stops the relay loop between lines. Cancelling does not
    /// kill the bot; it only releases the supervisor from the stream.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Run the full launch sequence, blocking until the bot exits.
    ///
    /// Order matters: the config overlay completes before anything is
    /// spawned, and the log is open before the spawn so a spawn failure
    /// can never lose bot output.
    pub fn run(&self) -> Result<RunOutcome> {
        let overlay = ConfigWriter::new(&self.config).write()?;
        self.events.append_best_effort(
            &Event::new(EventAction::ConfigWrite).with_details(json!({
                "applied": overlay
                    .applied
                    .iter()
                    .map(|rule| json!({"var": rule.var, "path": rule.path_display()}))
                    .collect::<Vec<_>>(),
            })),
        );

        let args = self.config.parse_command()?;
        let (program, program_args) = args.split_first().ok_or_else(|| {
            LauncherError::UserError("bot command is empty".to_string())
        })?;

        let mut log = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.config.log_path)
            .map_err(|e| {
                LauncherError::IoError(format!(
                    "failed to open bot log '{}': {}",
                    self.config.log_path.display(),
                    e
                ))
            })?;

        let (reader, writer) = std::io::pipe().map_err(|e| {
            LauncherError::SpawnError(format!("failed to create output pipe: {}", e))
        })?;

        // The Command is dropped right after the spawn so the parent holds
        // no write end of the pipe; otherwise the relay would never see EOF.
        let mut child = {
            let writer_clone = writer.try_clone().map_err(|e| {
                LauncherError::SpawnError(format!("failed to clone output pipe: {}", e))
            })?;

            let mut command = Command::new(program);
            command.args(program_args).stdout(writer).stderr(writer_clone);
            command.spawn().map_err(|e| {
                LauncherError::SpawnError(format!(
                    "failed to execute '{}': {}\n\
                     Fix: ensure the command is installed and in PATH.",
                    program, e
                ))
            })?
        };

        self.events.append_best_effort(
            &Event::new(EventAction::Launch).with_details(json!({
                "command": self.config.command,
                "pid": child.id(),
            })),
        );

        let mut source = BufReader::new(reader);
        let mut console = std::io::stdout();
        let lines_relayed = relay::relay_lines(&mut source, &mut console, &mut log, &self.cancel)?;

        let status = child.wait().map_err(|e| {
            LauncherError::SpawnError(format!("failed to wait for bot process: {}", e))
        })?;
        let exit_code = status.code().unwrap_or(1);

        self.events.append_best_effort(
            &Event::new(EventAction::Exit).with_details(json!({
                "exit_code": exit_code,
                "lines_relayed": lines_relayed,
            })),
        );

        Ok(RunOutcome {
            exit_code,
            lines_relayed,
        })
    }
}
