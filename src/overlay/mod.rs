//! Environment overlay for the bot's config documents.
//!
//! The bot checkout ships a `credentials.json` and a `settings.json`. In a
//! hosted deployment, secrets and per-instance settings arrive through the
//! process environment instead of the checkout, so before every launch the
//! documents are patched in place from a fixed set of naming conventions:
//!
//! - `DISCORD_TOKEN` -> `credentials.discord.token`
//! - `G_<KEY>` -> `credentials.google.<key>` (for keys already present)
//! - `S_<KEY>` -> `settings.<key>` (for keys already present)
//!
//! The overlay never adds keys. Both writes happen independently: a failure
//! between them leaves the credentials updated and the settings untouched.

pub mod document;
pub mod rules;


use crate::config::LaunchConfig;
use crate::error::Result;
use rules::{EnvRule, ResolvedRule};
use serde_json::Value;
use std::path::PathBuf;

/// Overlay rules for both documents, resolved against the environment.
///
/// Output of [`ConfigWriter::resolve`], consumed by the `check` command.
#[derive(Debug)]
pub struct ResolvedOverlay {
    pub credentials: Vec<ResolvedRule>,
    pub settings: Vec<ResolvedRule>,
}

/// Summary of a completed overlay write.
#[derive(Debug)]
pub struct WriteSummary {
    /// Rules that actually fired, in application order.
    pub applied: Vec<EnvRule>,
    /// The bot's command prefix as found in the settings document.
    pub command_prefix: Option<String>,
}

/// Patches the credentials and settings documents from the environment.
pub struct ConfigWriter {
    credentials_path: PathBuf,
    settings_path: PathBuf,
}

impl ConfigWriter {
    pub fn new(config: &LaunchConfig) -> Self {
        Self {
            credentials_path: config.credentials_path.clone(),
            settings_path: config.settings_path.clone(),
        }
    }

    /// Run the overlay against the real process environment.
    pub fn write(&self) -> Result<WriteSummary> {
        self.write_with_env(|var| std::env::var(var).ok())
    }

    /// Run the overlay with an explicit environment lookup.
    ///
    /// Credentials first, then settings, matching the original launch
    /// sequence. Any error is propagated immediately; there are no retries
    /// and no transaction spanning the two files.
    pub fn write_with_env<F>(&self, lookup: F) -> Result<WriteSummary>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut applied = Vec::new();

        let mut credentials = document::load_document(&self.credentials_path)?;
        let cred_rules = rules::credential_rules(&credentials)?;
        applied.extend(rules::apply_rules(&mut credentials, &cred_rules, &lookup)?);
        document::save_document(&self.credentials_path, &credentials)?;

        let mut settings = document::load_document(&self.settings_path)?;
        let setting_rules = rules::settings_rules(&settings)?;
        applied.extend(rules::apply_rules(&mut settings, &setting_rules, &lookup)?);
        document::save_document(&self.settings_path, &settings)?;

        let command_prefix = settings
            .get("commandPrefix")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(WriteSummary {
            applied,
            command_prefix,
        })
    }

    /// Build and resolve the full rule table without writing anything.
    pub fn resolve<F>(&self, lookup: F) -> Result<ResolvedOverlay>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = document::load_document(&self.credentials_path)?;
        let cred_rules = rules::credential_rules(&credentials)?;

        let settings = document::load_document(&self.settings_path)?;
        let setting_rules = rules::settings_rules(&settings)?;

        Ok(ResolvedOverlay {
            credentials: rules::resolve_rules(&cred_rules, &lookup),
            settings: rules::resolve_rules(&setting_rules, &lookup),
        })
    }
}
