use super::confetti::Confetti;
use super::handlers;
use super::ui;
use crate::{
    config::{GameSettings, MastermindConfig},
    error::Result,
    game::Session,
    model::Color,
};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};

const CONFETTI_PARTICLES: usize = 100;
const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
    GameOver,
}

/// Presentation state around a [`Session`]. Dark mode, modals and the
/// confetti live here and never reach the game core.
pub struct App {
    pub session: Session,
    pub input_mode: InputMode,
    pub dark_mode: bool,
    pub confetti_enabled: bool,
    pub confetti: Option<Confetti>,
    pub palette_cursor: usize,
    pub slot_cursor: usize,
    pub message: Option<String>,
    fx_rng: StdRng,
}

impl App {
    pub fn new(config: &MastermindConfig, settings: GameSettings, seed: Option<u64>) -> Self {
        let fx_rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_os_rng(),
        };
        Self {
            session: Session::new(settings, seed),
            input_mode: InputMode::Normal,
            dark_mode: config.tui.dark_mode,
            confetti_enabled: config.tui.confetti,
            confetti: None,
            palette_cursor: 0,
            slot_cursor: 0,
            message: None,
            fx_rng,
        }
    }

    pub fn palette(&self) -> &[Color] {
        &self.session.state().settings().palette
    }

    pub fn code_length(&self) -> usize {
        self.session.state().settings().code_length
    }

    /// Pick the palette color at `index` into the next empty slot.
    pub fn pick_color(&mut self, index: usize) {
        if let Some(color) = self.palette().get(index).copied() {
            self.palette_cursor = index;
            if self.session.state().is_guess_complete() {
                self.message = Some("Guess is full".to_string());
            }
            self.session.select_color(color);
        }
    }

    pub fn pick_color_at_cursor(&mut self) {
        self.pick_color(self.palette_cursor);
    }

    pub fn palette_next(&mut self) {
        self.palette_cursor = (self.palette_cursor + 1) % self.palette().len();
    }

    pub fn palette_prev(&mut self) {
        let len = self.palette().len();
        self.palette_cursor = (self.palette_cursor + len - 1) % len;
    }

    pub fn slot_next(&mut self) {
        self.slot_cursor = (self.slot_cursor + 1) % self.code_length();
    }

    pub fn slot_prev(&mut self) {
        let len = self.code_length();
        self.slot_cursor = (self.slot_cursor + len - 1) % len;
    }

    pub fn clear_slot_at_cursor(&mut self) {
        self.session.clear_slot(self.slot_cursor);
    }

    /// Clear the rightmost filled slot
    pub fn clear_last(&mut self) {
        let last = self
            .session
            .state()
            .current_guess()
            .iter()
            .rposition(Option::is_some);
        if let Some(index) = last {
            self.session.clear_slot(index);
            self.slot_cursor = index;
        }
    }

    pub fn clear_guess(&mut self) {
        if self.session.state().is_guess_empty() {
            return;
        }
        self.session.clear_current_guess();
        self.slot_cursor = 0;
    }

    pub fn submit(&mut self) {
        let state = self.session.state();
        if state.is_over() {
            self.message = Some("Game over. Press n for a new game".to_string());
            return;
        }
        if !state.is_guess_complete() {
            self.message = Some(format!("Fill all {} pegs first", self.code_length()));
            return;
        }

        self.session.submit_guess();
        self.slot_cursor = 0;

        let state = self.session.state();
        if state.is_over() {
            self.input_mode = InputMode::GameOver;
            if state.is_won() && self.confetti_enabled {
                self.confetti = Some(Confetti::burst(&mut self.fx_rng, CONFETTI_PARTICLES));
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session.new_game();
        self.input_mode = InputMode::Normal;
        self.confetti = None;
        self.slot_cursor = 0;
        self.message = Some("New game".to_string());
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_help(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Help => InputMode::Normal,
            _ => InputMode::Help,
        };
    }

    /// Close whichever modal is open. The game-over modal can be dismissed
    /// to look at the finished board.
    pub fn close_modal(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Advance animations; true when a redraw is due.
    pub fn on_tick(&mut self) -> bool {
        match self.confetti.as_mut() {
            Some(confetti) => {
                confetti.tick();
                if confetti.is_finished() {
                    self.confetti = None;
                }
                true
            }
            None => false,
        }
    }

    fn poll_interval(&self) -> Duration {
        if self.confetti.is_some() {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        }
    }
}

pub fn run_tui(config: MastermindConfig, settings: GameSettings, seed: Option<u64>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, settings, seed);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI loop failed");
        eprintln!("Error: {}", err);
    }

    let tally = app.session.tally();
    tracing::info!(won = tally.won, lost = tally.lost, "Session ended");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(app.poll_interval())? {
            app.on_tick();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handlers::handle_key(app, key) {
                return Ok(());
            }
        }
    }
}
