use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle key events while the win/lose modal is open
pub fn handle_game_over(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('n') | KeyCode::Char('N') => app.new_game(),
        KeyCode::Esc | KeyCode::Enter => app.close_modal(),
        KeyCode::Char('d') => app.toggle_dark_mode(),
        _ => {}
    }
    false
}
