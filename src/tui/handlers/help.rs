use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle key events while the help modal is open
pub fn handle_help(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.close_modal(),
        KeyCode::Char('d') => app.toggle_dark_mode(),
        _ => {}
    }
    false
}
