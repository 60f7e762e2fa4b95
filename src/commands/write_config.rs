//! The `write-config` command: apply the environment overlay and stop.

use crate::cli::WriteConfigArgs;
use crate::error::Result;
use crate::overlay::ConfigWriter;

pub fn cmd_write_config(args: WriteConfigArgs) -> Result<()> {
    let config = super::resolve_config(&args.config)?;

    let summary = ConfigWriter::new(&config).write()?;

    if summary.applied.is_empty() {
        println!("No environment overrides matched; documents rewritten unchanged.");
    } else {
        println!("Applied {} environment override(s):", summary.applied.len());
        for rule in &summary.applied {
            println!("  {} -> {}", rule.var, rule.path_display());
        }
    }

    if let Some(prefix) = &summary.command_prefix {
        println!("Command prefix: {}", prefix);
    }

    Ok(())
}
