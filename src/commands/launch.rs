//! The `launch` command: overlay, spawn, relay, wait.

use crate::cli::LaunchArgs;
use crate::error::Result;
use crate::supervisor::Supervisor;

/// Run the full launch sequence and return the bot's exit code.
pub fn cmd_launch(args: LaunchArgs) -> Result<i32> {
    let config = super::resolve_config(&args.config)?;

    let supervisor = Supervisor::new(config);
    let outcome = supervisor.run()?;

    Ok(outcome.exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ConfigArgs;
    use tempfile::TempDir;

    fn launch_args(temp_dir: &TempDir, command: &str) -> LaunchArgs {
        std::fs::write(
            temp_dir.path().join("credentials.json"),
            r#"{"discord": {"token": "t"}, "google": {}}"#,
        )
        .unwrap();
        std::fs::write(
            temp_dir.path().join("settings.json"),
            r#"{"commandPrefix": "!"}"#,
        )
        .unwrap();

        LaunchArgs {
            config: ConfigArgs {
                config: temp_dir.path().join("launcher.yaml"),
                credentials: Some(temp_dir.path().join("credentials.json")),
                settings: Some(temp_dir.path().join("settings.json")),
                log: Some(temp_dir.path().join("bot.log")),
                events: Some(temp_dir.path().join("events.ndjson")),
                command: Some(command.to_string()),
            },
        }
    }

    #[test]
    fn launch_returns_child_exit_code() {
        let temp_dir = TempDir::new().unwrap();
        #[cfg(windows)]
        let args = launch_args(&temp_dir, "cmd /c exit 3");
        #[cfg(not(windows))]
        let args = launch_args(&temp_dir, "sh -c 'exit 3'");

        let code = cmd_launch(args).unwrap();
        assert_eq!(code, 3);
    }

    #[test]
    fn launch_returns_success_for_clean_exit() {
        let temp_dir = TempDir::new().unwrap();
        #[cfg(windows)]
        let args = launch_args(&temp_dir, "cmd /c echo bye");
        #[cfg(not(windows))]
        let args = launch_args(&temp_dir, "echo bye");

        let code = cmd_launch(args).unwrap();
        assert_eq!(code, 0);
        assert!(
            std::fs::read_to_string(temp_dir.path().join("bot.log"))
                .unwrap()
                .contains("bye")
        );
    }

    #[test]
    fn launch_with_missing_documents_fails() {
        let temp_dir = TempDir::new().unwrap();
        let args = LaunchArgs {
            config: ConfigArgs {
                config: temp_dir.path().join("launcher.yaml"),
                credentials: Some(temp_dir.path().join("credentials.json")),
                settings: Some(temp_dir.path().join("settings.json")),
                log: Some(temp_dir.path().join("bot.log")),
                events: Some(temp_dir.path().join("events.ndjson")),
                command: Some("echo never".to_string()),
            },
        };

        let err = cmd_launch(args).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
