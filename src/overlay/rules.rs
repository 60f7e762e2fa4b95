//! Declarative environment-overlay rules.
//!
//! Each rule maps an environment variable name to a path inside one of the
//! config documents. Rules are derived from the document contents at launch
//! time, which enforces the overlay policy: existing keys can be overridden,
//! new keys are never added. An environment variable with no matching
//! document key simply produces no rule and is ignored.

use crate::error::{LauncherError, Result};
use serde_json::Value;

/// Environment variable that overrides the Discord bot token.
pub const DISCORD_TOKEN_VAR: &str = "DISCORD_TOKEN";

/// Prefix for variables overriding keys of the `google` credentials object.
pub const GOOGLE_PREFIX: &str = "G_";

/// Prefix for variables overriding top-level settings keys.
pub const SETTINGS_PREFIX: &str = "S_";

/// A single overlay rule: environment variable -> document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvRule {
    /// Environment variable name (e.g. `G_PROJECT_ID`).
    pub var: String,
    /// Path segments into the document (e.g. `["google", "project_id"]`).
    pub path: Vec<String>,
}

impl EnvRule {
    fn new(var: impl Into<String>, path: &[&str]) -> Self {
        Self {
            var: var.into(),
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Dotted rendering of the document path, for display and event details.
    pub fn path_display(&self) -> String {
        self.path.join(".")
    }
}

/// An overlay rule together with its current environment state.
///
/// Produced by the `check` command so operators can see the full mapping
/// table and which overrides would fire on the next launch.
#[derive(Debug, Clone)]
pub struct ResolvedRule {
    pub rule: EnvRule,
    /// Whether the environment variable is currently set.
    pub is_set: bool,
}

/// Build the overlay rules for the credentials document.
///
/// The rule set is: `DISCORD_TOKEN` -> `discord.token`, plus one
/// `G_<KEY_UPPERCASED>` rule per key already present in the `google`
/// object. A credentials document without a `google` object is malformed
/// and rejected outright.
pub fn credential_rules(document: &Value) -> Result<Vec<EnvRule>> {
    let mut rules = vec![EnvRule::new(DISCORD_TOKEN_VAR, &["discord", "token"])];

    let google = document
        .get("google")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            LauncherError::ConfigError(
                "credentials document is missing the 'google' object".to_string(),
            )
        })?;

    for key in google.keys() {
        rules.push(EnvRule {
            var: format!("{}{}", GOOGLE_PREFIX, key.to_uppercase()),
            path: vec!["google".to_string(), key.clone()],
        });
    }

    Ok(rules)
}

/// Build the overlay rules for the settings document.
///
/// One `S_<KEY_UPPERCASED>` rule per top-level key.
pub fn settings_rules(document: &Value) -> Result<Vec<EnvRule>> {
    let settings = document.as_object().ok_or_else(|| {
        LauncherError::ConfigError("settings document is not a JSON object".to_string())
    })?;

    Ok(settings
        .keys()
        .map(|key| EnvRule {
            var: format!("{}{}", SETTINGS_PREFIX, key.to_uppercase()),
            path: vec![key.clone()],
        })
        .collect())
}

/// Apply a rule set to a document, overwriting matched keys in place.
///
/// For each rule whose environment variable is set (per `lookup`), the
/// value at the rule's document path is replaced with the variable's value
/// as a JSON string. Environment values are always strings, so an override
/// of a numeric or boolean setting changes its JSON type; downstream
/// consumers of the documents tolerate this.
///
/// A set variable whose document path no longer exists is a config error:
/// rules derived from document keys cannot hit this, but the static
/// `DISCORD_TOKEN` rule can when the `discord` object is missing.
///
/// Returns the rules that actually fired.
pub fn apply_rules<F>(document: &mut Value, rules: &[EnvRule], lookup: F) -> Result<Vec<EnvRule>>
where
    F: Fn(&str) -> Option<String>,
{
    let mut applied = Vec::new();

    for rule in rules {
        let Some(value) = lookup(&rule.var) else {
            continue;
        };

        let slot = resolve_path_mut(document, &rule.path).ok_or_else(|| {
            LauncherError::ConfigError(format!(
                "environment variable {} targets '{}', which does not exist in the document",
                rule.var,
                rule.path_display()
            ))
        })?;

        *slot = Value::String(value);
        applied.push(rule.clone());
    }

    Ok(applied)
}

/// Resolve overlay rules against the current environment state.
pub fn resolve_rules<F>(rules: &[EnvRule], lookup: F) -> Vec<ResolvedRule>
where
    F: Fn(&str) -> Option<String>,
{
    rules
        .iter()
        .map(|rule| ResolvedRule {
            rule: rule.clone(),
            is_set: lookup(&rule.var).is_some(),
        })
        .collect()
}

/// Walk the document to the value at `path`, mutably.
///
/// Returns None if any segment is missing or a non-object is traversed.
/// Never inserts: the overlay policy is overwrite-only.
fn resolve_path_mut<'a>(document: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = document;
    for segment in path {
        current = current.as_object_mut()?.get_mut(segment)?;
    }
    Some(current)
}
