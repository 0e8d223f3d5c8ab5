//! # Mastermind - a terminal code-breaking game
//!
//! The computer hides a sequence of colored pegs; you get a limited number
//! of guesses to find it. Each guess is scored with key pegs: one for every
//! peg of the right color in the right position, one for every peg of the
//! right color in the wrong position.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive terminal UI
//! mastermind
//!
//! # Line-by-line game on stdin/stdout
//! mastermind play
//!
//! # Score a guess against a known secret
//! mastermind score "red red blue green" "red blue red yellow"
//! ```
//!
//! ## Modules
//!
//! - [`model`]: Colors, codes and feedback
//! - [`game`]: Secret generation, scoring and the game state machine
//! - [`config`]: Game rules and the user configuration file
//! - [`cli`]: Command-line interface
//! - [`tui`]: Terminal user interface

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Holds the fixed game rules and the `mastermind.toml` user settings.
pub mod config;

/// Error types and result aliases.
pub mod error;

pub mod format;

/// Game logic.
///
/// Secret generation, guess scoring and the state machine, plus the
/// [`Session`](game::Session) that owns a running game.
pub mod game;

pub mod logging;

/// Data models: `Color`, `Code`, `PegResult`, `Feedback`, `GuessRecord`.
pub mod model;

/// Terminal user interface.
///
/// Interactive TUI built with ratatui.
pub mod tui;
