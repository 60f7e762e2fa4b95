//! Exit code constants for the launcher CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable launcher config)
//! - 2: Config document failure (missing/malformed JSON, missing schema object)
//! - 3: Process spawn failure
//! - 4: I/O failure (log or event file)
//!
//! `launch` is the exception: once the child process has been spawned and
//! waited on, the launcher exits with the child's own exit code instead.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unreadable/invalid launcher config.
pub const USER_ERROR: i32 = 1;

/// Config document failure: missing file, malformed JSON, or a document
/// that lacks an expected schema object.
pub const CONFIG_FAILURE: i32 = 2;

/// Spawn failure: the bot executable or script could not be started.
pub const SPAWN_FAILURE: i32 = 3;

/// I/O failure: the log file or event log could not be written.
pub const IO_FAILURE: i32 = 4;
