use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mastermind")]
#[command(author, version, about = "Crack the hidden color code in ten guesses")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file (defaults to ./mastermind.toml, then the user config dir)
    #[arg(long, global = true, env = "MASTERMIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write JSON logs to this file (overrides config)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play in the interactive terminal UI (default)
    Tui {
        /// Seed for the secret generator
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play line by line on stdin/stdout
    Play {
        /// Seed for the secret generator
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score a guess against a secret
    Score {
        /// Secret code, e.g. "red,blue,green,yellow" or "r b g y"
        secret: String,

        /// Guess code, same format as the secret
        guess: String,

        /// Report one result per guess position instead of grouped counts
        #[arg(long)]
        positional: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw a random secret code
    Generate {
        /// Seed for the secret generator
        #[arg(long)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or create the configuration file
    Config {
        /// Write a default config file (to --config, or the user config dir)
        #[arg(long)]
        init: bool,
    },
}
