use anyhow::{Context, Result};
use clap::Parser;

use mastermind::cli::handlers::{self, CommandContext};
use mastermind::cli::{Cli, Commands};
use mastermind::config::MastermindConfig;
use mastermind::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui { seed: None });

    // `config --init` creates the file the loader would otherwise require
    if let Commands::Config { init: true } = command {
        logging::init(cli.verbose, cli.log_file, true);
        return handlers::handle_config_init(cli.config);
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let (config, config_path) =
        MastermindConfig::load(cli.config.as_deref(), &cwd).context("Failed to load config")?;

    let interactive = matches!(command, Commands::Tui { .. });
    let log_file = cli.log_file.or_else(|| config.log.file.clone());
    logging::init(cli.verbose || config.log.verbose, log_file, !interactive);

    if let Some(path) = &config_path {
        tracing::debug!(path = %path.display(), "Loaded config");
    }

    let ctx = CommandContext::new(config, config_path);
    ctx.settings.validate().context("Invalid game settings")?;

    match command {
        Commands::Tui { seed } => handlers::handle_tui(ctx, seed),
        Commands::Play { seed } => handlers::handle_play(&ctx, seed),
        Commands::Score {
            secret,
            guess,
            positional,
            json,
        } => handlers::handle_score(&ctx, &secret, &guess, positional, json),
        Commands::Generate { seed, json } => handlers::handle_generate(&ctx, seed, json),
        Commands::Config { .. } => handlers::handle_config(&ctx),
    }
}
