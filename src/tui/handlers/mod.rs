mod game_over;
mod help;
mod normal_mode;

pub use game_over::handle_game_over;
pub use help::handle_help;
pub use normal_mode::handle_normal_mode;

use crate::tui::app::{App, InputMode};
use crossterm::event::KeyEvent;

/// Dispatch a key press by mode.
/// Returns true if the application should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let before = app.input_mode;
    let quit = match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Help => handle_help(app, key),
        InputMode::GameOver => handle_game_over(app, key),
    };

    if app.input_mode != before {
        tracing::debug!(from = ?before, to = ?app.input_mode, "Mode change");
    }
    quit
}
