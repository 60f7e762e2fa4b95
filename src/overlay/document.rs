//! Loading and saving of the JSON config documents.
//!
//! Both documents ship with the bot checkout and must already exist; the
//! launcher never creates them. The settings file historically carries a
//! UTF-8 byte-order mark, so reads strip one when present. Writes use the
//! same 4-space indentation the documents were originally formatted with,
//! and key order is preserved so an overlay only touches the values it
//! actually overrides.

use crate::error::{LauncherError, Result};
use crate::fs::atomic_write;
use serde_json::Value;
use std::path::Path;

/// Load a JSON document from disk, tolerating a UTF-8 BOM prefix.
///
/// A missing file, unreadable file, or invalid JSON is fatal: the launcher
/// refuses to start a bot against a broken document.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        LauncherError::ConfigError(format!("failed to read '{}': {}", path.display(), e))
    })?;

    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    serde_json::from_str(content).map_err(|e| {
        LauncherError::ConfigError(format!("failed to parse '{}': {}", path.display(), e))
    })
}

/// Serialize a document back to disk with 4-space indentation.
///
/// Replaces the file contents atomically, so a crash mid-write never leaves
/// a truncated document behind.
pub fn save_document(path: &Path, document: &Value) -> Result<()> {
    let formatted = to_pretty_string(document)?;
    atomic_write(path, formatted.as_bytes())
}

/// Render a JSON value with 4-space indentation (no trailing newline).
pub fn to_pretty_string(document: &Value) -> Result<String> {
    use serde::Serialize;

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    document.serialize(&mut serializer).map_err(|e| {
        LauncherError::ConfigError(format!("failed to serialize document: {}", e))
    })?;

    String::from_utf8(out)
        .map_err(|e| LauncherError::ConfigError(format!("serialized document is not UTF-8: {}", e)))
}
