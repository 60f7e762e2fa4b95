//! Cancellable line relay.
//!
//! Streams lines from the child's combined output to the console and the
//! bot log. The relay is a plain blocking loop, but it checks a shared
//! cancellation token between lines so a timeout or restart policy can be
//! layered on later without rewriting the loop.

use crate::error::{LauncherError, Result};
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag that stops a relay between lines.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Relay lines from `source` to both sinks until end-of-stream or
/// cancellation.
///
/// Lines are forwarded verbatim, trailing newline included, so the log is
/// byte-for-byte what the child wrote. The console sink is flushed per line
/// for interactive visibility. Any read or write error is fatal; a half-full
/// disk should stop the launcher loudly, not silently drop bot output.
///
/// Returns the number of lines relayed.
pub fn relay_lines<R, C, L>(
    source: &mut R,
    console: &mut C,
    log: &mut L,
    cancel: &CancelToken,
) -> Result<u64>
where
    R: BufRead,
    C: Write,
    L: Write,
{
    let mut lines = 0u64;
    let mut buffer = String::new();

    loop {
        if cancel.is_cancelled() {
            break;
        }

        buffer.clear();
        let bytes_read = source
            .read_line(&mut buffer)
            .map_err(|e| LauncherError::IoError(format!("failed to read bot output: {}", e)))?;
        if bytes_read == 0 {
            break;
        }

        console
            .write_all(buffer.as_bytes())
            .and_then(|()| console.flush())
            .map_err(|e| LauncherError::IoError(format!("failed to write to console: {}", e)))?;

        log.write_all(buffer.as_bytes())
            .map_err(|e| LauncherError::IoError(format!("failed to write to bot log: {}", e)))?;

        lines += 1;
    }

    Ok(lines)
}
