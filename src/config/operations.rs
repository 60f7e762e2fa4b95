//! LaunchConfig loading, validation, and utility operations.

use super::model::LaunchConfig;
use crate::error::{LauncherError, Result};
use std::path::Path;

impl LaunchConfig {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(LaunchConfig)` - Successfully loaded and validated config
    /// * `Err(LauncherError::UserError)` - Read/parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LauncherError::UserError(format!(
                "failed to read launcher config '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file if it exists, otherwise use defaults.
    ///
    /// This is the normal entry path: a missing `launcher.yaml` means the
    /// original fixed layout, while a present-but-broken one is a user error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: LaunchConfig = serde_yaml::from_str(yaml).map_err(|e| {
            LauncherError::UserError(format!("failed to parse launcher config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - every path must be non-empty
    /// - `command` must be non-empty and shell-words parseable
    pub fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("credentials_path", &self.credentials_path),
            ("settings_path", &self.settings_path),
            ("log_path", &self.log_path),
            ("events_path", &self.events_path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(LauncherError::UserError(format!(
                    "config validation failed: {} must not be empty",
                    name
                )));
            }
        }

        if self.parse_command()?.is_empty() {
            return Err(LauncherError::UserError(
                "config validation failed: command must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Split `command` into program + arguments using shell-words.
    pub fn parse_command(&self) -> Result<Vec<String>> {
        shell_words::split(&self.command).map_err(|e| {
            LauncherError::UserError(format!(
                "failed to parse bot command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                self.command, e
            ))
        })
    }
}
