//! Terminal user interface for mastermind.
//!
//! An interactive TUI built with ratatui.
//!
//! ## Usage
//!
//! ```bash
//! mastermind tui
//! ```
//!
//! ## Keybindings
//!
//! - `1-9`: Pick a palette color into the next empty slot
//! - `←/→`, `Space`: Move through the palette / pick the highlighted color
//! - `Tab`: Move the slot cursor
//! - `x`/`Del`: Clear the slot under the cursor
//! - `Backspace`: Clear the last filled slot
//! - `c`: Clear the current guess
//! - `Enter`: Submit
//! - `n`: New game
//! - `d`: Toggle dark mode
//! - `?`: Help
//! - `q`: Quit

pub mod app;
pub mod confetti;
pub mod handlers;
pub mod theme;
pub mod ui;
mod ui_modals;
mod ui_utils;

pub use app::run_tui;
