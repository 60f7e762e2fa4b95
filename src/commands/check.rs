//! The `check` command: validate the config and show the overlay table.

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::overlay::ConfigWriter;
use crate::overlay::rules::ResolvedRule;

pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = super::resolve_config(&args.config)?;

    let command_parts = config.parse_command()?;
    println!("Launcher config OK.");
    println!("  Bot command:  {}", shell_words::join(&command_parts));
    println!("  Credentials:  {}", config.credentials_path.display());
    println!("  Settings:     {}", config.settings_path.display());
    println!("  Bot log:      {}", config.log_path.display());
    println!("  Event log:    {}", config.events_path.display());
    println!();

    let resolved = ConfigWriter::new(&config).resolve(|var| std::env::var(var).ok())?;

    print_rules("Credentials overrides", &resolved.credentials);
    println!();
    print_rules("Settings overrides", &resolved.settings);

    let active = resolved
        .credentials
        .iter()
        .chain(resolved.settings.iter())
        .filter(|r| r.is_set)
        .count();
    println!();
    println!("{} override(s) would apply on the next launch.", active);

    Ok(())
}

fn print_rules(heading: &str, rules: &[ResolvedRule]) {
    println!("{} ({}):", heading, rules.len());
    for resolved in rules {
        println!(
            "  {:<24} -> {:<24} [{}]",
            resolved.rule.var,
            resolved.rule.path_display(),
            if resolved.is_set { "set" } else { "unset" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ConfigArgs;
    use tempfile::TempDir;

    fn check_args(temp_dir: &TempDir) -> CheckArgs {
        std::fs::write(
            temp_dir.path().join("credentials.json"),
            r#"{"discord": {"token": "t"}, "google": {"project_id": "p"}}"#,
        )
        .unwrap();
        std::fs::write(
            temp_dir.path().join("settings.json"),
            r#"{"commandPrefix": "!"}"#,
        )
        .unwrap();

        CheckArgs {
            config: ConfigArgs {
                config: temp_dir.path().join("launcher.yaml"),
                credentials: Some(temp_dir.path().join("credentials.json")),
                settings: Some(temp_dir.path().join("settings.json")),
                log: Some(temp_dir.path().join("bot.log")),
                events: Some(temp_dir.path().join("events.ndjson")),
                command: None,
            },
        }
    }

    #[test]
    fn check_succeeds_on_valid_documents() {
        let temp_dir = TempDir::new().unwrap();
        cmd_check(check_args(&temp_dir)).unwrap();
    }

    #[test]
    fn check_is_read_only() {
        let temp_dir = TempDir::new().unwrap();
        let args = check_args(&temp_dir);
        let before =
            std::fs::read_to_string(temp_dir.path().join("credentials.json")).unwrap();

        cmd_check(args).unwrap();

        let after = std::fs::read_to_string(temp_dir.path().join("credentials.json")).unwrap();
        assert_eq!(before, after);
        assert!(!temp_dir.path().join("bot.log").exists());
    }

    #[test]
    fn check_fails_on_missing_google_object() {
        let temp_dir = TempDir::new().unwrap();
        let args = check_args(&temp_dir);
        std::fs::write(
            temp_dir.path().join("credentials.json"),
            r#"{"discord": {"token": "t"}}"#,
        )
        .unwrap();

        let err = cmd_check(args).unwrap_err();
        assert!(err.to_string().contains("'google' object"));
    }

    #[test]
    fn check_fails_on_invalid_command_override() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = check_args(&temp_dir);
        args.config.command = Some("node 'unterminated".to_string());

        assert!(cmd_check(args).is_err());
    }
}
