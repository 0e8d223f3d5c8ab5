use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle Normal mode key events
/// Returns true if the application should quit
pub fn handle_normal_mode(app: &mut App, key: KeyEvent) -> bool {
    // Messages last until the next key press
    app.message = None;

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('d') => app.toggle_dark_mode(),
        KeyCode::Char('n') => app.new_game(),

        // Palette
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.pick_color(index);
        }
        KeyCode::Right | KeyCode::Char('l') => app.palette_next(),
        KeyCode::Left | KeyCode::Char('h') => app.palette_prev(),
        KeyCode::Char(' ') => app.pick_color_at_cursor(),

        // Current guess
        KeyCode::Tab => app.slot_next(),
        KeyCode::BackTab => app.slot_prev(),
        KeyCode::Char('x') | KeyCode::Delete => app.clear_slot_at_cursor(),
        KeyCode::Backspace => app.clear_last(),
        KeyCode::Char('c') => app.clear_guess(),
        KeyCode::Enter => app.submit(),
        _ => {}
    }

    false
}
