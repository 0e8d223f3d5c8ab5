use crate::config::{CONFIG_FILE_NAME, MastermindConfig};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use super::CommandContext;

pub fn handle_config(ctx: &CommandContext) -> Result<()> {
    match &ctx.config_path {
        Some(path) => println!("{} {}", "# Loaded from".dimmed(), path.display()),
        None => println!("{}", "# No config file found, using defaults".dimmed()),
    }
    print!("{}", ctx.config.to_toml()?);
    Ok(())
}

/// Runs before any config is loaded, since the target usually does not exist yet.
pub fn handle_config_init(explicit: Option<PathBuf>) -> Result<()> {
    let path = match explicit {
        Some(path) => path,
        None => MastermindConfig::user_config_dir()
            .context("Could not determine the user config directory")?
            .join(CONFIG_FILE_NAME),
    };

    MastermindConfig::default()
        .save_new(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Wrote default config");
    println!("{} {}", "Created".green(), path.display());
    Ok(())
}
