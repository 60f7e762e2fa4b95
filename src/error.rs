//! Error types for the launcher CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for launcher operations.
///
/// Each variant maps to a specific exit code. None of these errors are
/// caught or retried anywhere in the launch sequence: a misconfigured or
/// unlaunchable bot fails loudly rather than run in a degraded state.
#[derive(Error, Debug)]
pub enum LauncherError {
    /// User provided invalid arguments or the launcher config is invalid.
    #[error("{0}")]
    UserError(String),

    /// A config document (credentials/settings) is missing, malformed,
    /// or lacks an expected schema object.
    #[error("Config document error: {0}")]
    ConfigError(String),

    /// The bot process could not be spawned.
    #[error("Failed to spawn bot process: {0}")]
    SpawnError(String),

    /// The log file or event log could not be written.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl LauncherError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::UserError(_) => exit_codes::USER_ERROR,
            LauncherError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            LauncherError::SpawnError(_) => exit_codes::SPAWN_FAILURE,
            LauncherError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
