//! Config command.

use std::io::Write;

use crate::config::Settings;

/// Run config command - display current configuration as TOML.
pub fn run_config(config: &Settings, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Current Configuration:")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "{}", toml::to_string_pretty(config)?)?;
    Ok(())
}
