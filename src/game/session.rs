use super::{GameState, GameStatus};
use crate::config::GameSettings;
use crate::model::Color;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Games won and lost during this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub won: usize,
    pub lost: usize,
}

impl Tally {
    pub fn played(&self) -> usize {
        self.won + self.lost
    }
}

/// The single owner of a running game and its random source.
///
/// Frontends hold one `Session` and route every mutation through it.
pub struct Session {
    state: GameState,
    rng: StdRng,
    tally: Tally,
}

impl Session {
    /// Seeded sessions replay the same sequence of secrets.
    pub fn new(settings: GameSettings, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let state = GameState::new(settings, &mut rng);
        Self {
            state,
            rng,
            tally: Tally::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    fn apply(&mut self, transition: impl FnOnce(GameState) -> GameState) {
        let was_over = self.state.is_over();
        self.state = transition(self.state.clone());
        if !was_over {
            match self.state.status() {
                GameStatus::Won => self.tally.won += 1,
                GameStatus::Lost => self.tally.lost += 1,
                GameStatus::InProgress => {}
            }
        }
    }

    pub fn select_color(&mut self, color: Color) {
        self.apply(|s| s.select_color(color));
    }

    pub fn clear_slot(&mut self, index: usize) {
        self.apply(|s| s.clear_slot(index));
    }

    pub fn clear_current_guess(&mut self) {
        self.apply(GameState::clear_current_guess);
    }

    /// Returns true when the guess was accepted and scored.
    pub fn submit_guess(&mut self) -> bool {
        let before = self.state.attempts_used();
        self.apply(GameState::submit_guess);
        self.state.attempts_used() > before
    }

    pub fn new_game(&mut self) {
        self.state = self.state.new_game(&mut self.rng);
    }
}
