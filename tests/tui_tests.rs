use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mastermind::{
    config::{GameSettings, MastermindConfig},
    game::GameStatus,
    model::Color,
    tui::{
        app::{App, InputMode},
        handlers::handle_key,
        ui,
    },
};
use ratatui::{Terminal, backend::TestBackend};

/// Helper to create a test app with a fixed seed
fn create_test_app() -> App {
    App::new(&MastermindConfig::default(), GameSettings::default(), Some(99))
}

fn press(app: &mut App, code: KeyCode) -> bool {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_code(app: &mut App, colors: &[Color]) {
    for color in colors {
        let index = app.palette().iter().position(|c| c == color).unwrap();
        let digit = char::from_digit(index as u32 + 1, 10).unwrap();
        press(app, KeyCode::Char(digit));
    }
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// A color that does not appear in the secret
fn missing_color(app: &App) -> Color {
    let secret = app.session.state().secret().clone();
    app.palette()
        .iter()
        .copied()
        .find(|c| !secret.colors().contains(c))
        .unwrap()
}

// ============================================================================
// Building a guess
// ============================================================================

#[test]
fn test_number_keys_fill_slots_in_order() {
    let mut app = create_test_app();

    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('3'));

    let guess = app.session.state().current_guess();
    assert_eq!(guess[0], Some(Color::Red));
    assert_eq!(guess[1], Some(Color::Green));
    assert_eq!(guess[2], None);
    assert_eq!(app.palette_cursor, 2);
}

#[test]
fn test_full_guess_ignores_more_colors() {
    let mut app = create_test_app();

    type_code(&mut app, &[Color::Red, Color::Red, Color::Red, Color::Red]);
    press(&mut app, KeyCode::Char('2'));

    assert!(
        app.session
            .state()
            .current_guess()
            .iter()
            .all(|c| *c == Some(Color::Red))
    );
    assert_eq!(app.message.as_deref(), Some("Guess is full"));
}

#[test]
fn test_palette_cursor_wraps_and_picks() {
    let mut app = create_test_app();

    press(&mut app, KeyCode::Left);
    assert_eq!(app.palette_cursor, app.palette().len() - 1);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.palette_cursor, 0);

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.session.state().current_guess()[0], Some(Color::Blue));
}

#[test]
fn test_clear_slot_at_cursor() {
    let mut app = create_test_app();
    type_code(&mut app, &[Color::Red, Color::Blue, Color::Green]);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('x'));

    let guess = app.session.state().current_guess();
    assert_eq!(guess[0], Some(Color::Red));
    assert_eq!(guess[1], None);
    assert_eq!(guess[2], Some(Color::Green));

    // The hole is filled next
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(
        app.session.state().current_guess()[1],
        Some(Color::Yellow)
    );
}

#[test]
fn test_backspace_clears_last_filled_slot() {
    let mut app = create_test_app();
    type_code(&mut app, &[Color::Red, Color::Blue]);

    press(&mut app, KeyCode::Backspace);

    let guess = app.session.state().current_guess();
    assert_eq!(guess[0], Some(Color::Red));
    assert_eq!(guess[1], None);
    assert_eq!(app.slot_cursor, 1);
}

#[test]
fn test_clear_guess() {
    let mut app = create_test_app();
    type_code(&mut app, &[Color::Red, Color::Blue, Color::Green]);

    press(&mut app, KeyCode::Char('c'));

    assert!(app.session.state().is_guess_empty());
    assert_eq!(app.session.state().attempts_used(), 0);
}

// ============================================================================
// Submitting
// ============================================================================

#[test]
fn test_incomplete_guess_is_not_submitted() {
    let mut app = create_test_app();
    type_code(&mut app, &[Color::Red, Color::Blue]);

    press(&mut app, KeyCode::Enter);

    assert_eq!(app.session.state().attempts_used(), 0);
    assert_eq!(app.message.as_deref(), Some("Fill all 4 pegs first"));
}

#[test]
fn test_winning_guess_opens_game_over_modal() {
    let mut app = create_test_app();
    let secret = app.session.state().secret().clone();

    type_code(&mut app, secret.colors());
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.session.state().status(), GameStatus::Won);
    assert_eq!(app.input_mode, InputMode::GameOver);
    assert!(app.confetti.as_ref().is_some_and(|c| !c.is_empty()));
    assert_eq!(app.session.tally().won, 1);
}

#[test]
fn test_confetti_disabled_by_config() {
    let mut config = MastermindConfig::default();
    config.tui.confetti = false;
    let mut app = App::new(&config, GameSettings::default(), Some(99));
    let secret = app.session.state().secret().clone();

    type_code(&mut app, secret.colors());
    press(&mut app, KeyCode::Enter);

    assert!(app.session.state().is_won());
    assert!(app.confetti.is_none());
}

#[test]
fn test_confetti_runs_out() {
    let mut app = create_test_app();
    let secret = app.session.state().secret().clone();
    type_code(&mut app, secret.colors());
    press(&mut app, KeyCode::Enter);

    let mut ticks = 0;
    while app.on_tick() {
        ticks += 1;
        assert!(ticks < 1000);
    }
    assert!(app.confetti.is_none());
}

#[test]
fn test_losing_after_max_attempts() {
    let mut app = create_test_app();
    let miss = missing_color(&app);

    for _ in 0..10 {
        type_code(&mut app, &[miss; 4]);
        press(&mut app, KeyCode::Enter);
    }

    assert_eq!(app.session.state().status(), GameStatus::Lost);
    assert_eq!(app.input_mode, InputMode::GameOver);
    assert!(app.confetti.is_none());
    assert_eq!(app.session.tally().lost, 1);
}

// ============================================================================
// Modals
// ============================================================================

#[test]
fn test_game_over_modal_can_be_dismissed() {
    let mut app = create_test_app();
    let secret = app.session.state().secret().clone();
    type_code(&mut app, secret.colors());
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);

    // Board stays finished
    press(&mut app, KeyCode::Char('1'));
    assert!(app.session.state().is_guess_empty());
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.message.as_deref(),
        Some("Game over. Press n for a new game")
    );
}

#[test]
fn test_new_game_from_modal() {
    let mut app = create_test_app();
    let secret = app.session.state().secret().clone();
    type_code(&mut app, secret.colors());
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('n'));

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.session.state().status(), GameStatus::InProgress);
    assert!(app.session.state().history().is_empty());
    assert!(app.confetti.is_none());
    assert_eq!(app.session.tally().played(), 1);
}

#[test]
fn test_help_toggle() {
    let mut app = create_test_app();

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.input_mode, InputMode::Help);

    // Game keys do nothing while help is open
    press(&mut app, KeyCode::Char('1'));
    assert!(app.session.state().is_guess_empty());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_dark_mode_toggle() {
    let mut app = create_test_app();
    assert!(!app.dark_mode);

    press(&mut app, KeyCode::Char('d'));
    assert!(app.dark_mode);

    press(&mut app, KeyCode::Char('?'));
    press(&mut app, KeyCode::Char('d'));
    assert!(!app.dark_mode);
}

#[test]
fn test_quit_keys() {
    let mut app = create_test_app();
    assert!(!press(&mut app, KeyCode::Char('1')));
    assert!(press(&mut app, KeyCode::Char('q')));

    press(&mut app, KeyCode::Char('?'));
    assert!(press(&mut app, KeyCode::Char('q')));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_board() {
    let app = create_test_app();
    let screen = render(&app);

    assert!(screen.contains("Mastermind"));
    assert!(screen.contains("Attempt 1/10"));
    assert!(screen.contains("Colors"));
    assert!(screen.contains("PLAY"));
}

#[test]
fn test_render_help() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('?'));

    let screen = render(&app);
    assert!(screen.contains("How to Play"));
    assert!(screen.contains("HELP"));
}

#[test]
fn test_render_loss_reveals_secret() {
    let mut app = create_test_app();
    app.confetti_enabled = false;
    let miss = missing_color(&app);
    for _ in 0..10 {
        type_code(&mut app, &[miss; 4]);
        press(&mut app, KeyCode::Enter);
    }

    let screen = render(&app);
    assert!(screen.contains("Game Over"));
    assert!(screen.contains("The secret code was:"));
}

#[test]
fn test_render_in_dark_mode() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('d'));
    let screen = render(&app);
    assert!(screen.contains("Light Mode"));
}
