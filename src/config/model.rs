//! LaunchConfig struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a launch.
///
/// This struct represents the contents of an optional `launcher.yaml`.
/// Every path the launcher touches is named here explicitly, so tests can
/// redirect the whole sequence into temporary directories. Defaults match
/// the original deployment layout, where the launcher runs from a scripts
/// directory one level below the bot checkout.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Path to the credentials document (Discord token, Google keys).
    #[serde(default = "default_credentials_path")]
    pub credentials_path: PathBuf,

    /// Path to the settings document (commandPrefix and friends).
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,

    /// Path to the bot output log. Opened in append mode; one line per
    /// line of combined child stdout/stderr.
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,

    /// Path to the launcher's NDJSON event log.
    #[serde(default = "default_events_path")]
    pub events_path: PathBuf,

    /// Command line used to start the bot. Parsed with shell-words;
    /// no shell is involved.
    #[serde(default = "default_command")]
    pub command: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            credentials_path: default_credentials_path(),
            settings_path: default_settings_path(),
            log_path: default_log_path(),
            events_path: default_events_path(),
            command: default_command(),
        }
    }
}

// Default value functions for serde
fn default_credentials_path() -> PathBuf {
    PathBuf::from("../credentials.json")
}
fn default_settings_path() -> PathBuf {
    PathBuf::from("../settings.json")
}
fn default_log_path() -> PathBuf {
    PathBuf::from("../alter-ego.log")
}
fn default_events_path() -> PathBuf {
    PathBuf::from("../alter-ego-events.ndjson")
}
fn default_command() -> String {
    "node ../bot.js".to_string()
}
