use super::{generate, score_with};
use crate::config::GameSettings;
use crate::model::{Code, Color, GuessRecord};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One game of Mastermind.
///
/// Every transition consumes the state and returns the next one; guard
/// conditions (incomplete guess, game over, full guess) return the state
/// unchanged rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    settings: GameSettings,
    secret: Code,
    history: Vec<GuessRecord>,
    current_guess: Vec<Option<Color>>,
    status: GameStatus,
}

impl GameState {
    /// Start a game with a freshly drawn secret.
    ///
    /// Panics if `settings` has an empty palette or a zero code length.
    pub fn new<R: Rng>(settings: GameSettings, rng: &mut R) -> Self {
        let secret = generate(settings.code_length, &settings.palette, rng);
        Self::with_secret(settings, secret)
    }

    /// Start a game with a known secret.
    pub fn with_secret(settings: GameSettings, secret: Code) -> Self {
        assert_eq!(
            secret.len(),
            settings.code_length,
            "secret length must match code length"
        );
        assert!(settings.max_attempts >= 1, "max attempts must be at least 1");

        tracing::info!(
            code_length = settings.code_length,
            palette = settings.palette.len(),
            max_attempts = settings.max_attempts,
            "New game"
        );
        tracing::trace!(secret = %secret, "Secret drawn");

        Self {
            current_guess: vec![None; settings.code_length],
            settings,
            secret,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Same rules, new secret, empty board.
    pub fn new_game<R: Rng>(&self, rng: &mut R) -> Self {
        Self::new(self.settings.clone(), rng)
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn secret(&self) -> &Code {
        &self.secret
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    pub fn current_guess(&self) -> &[Option<Color>] {
        &self.current_guess
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    pub fn attempts_remaining(&self) -> usize {
        self.settings.max_attempts - self.history.len()
    }

    pub fn is_guess_complete(&self) -> bool {
        self.current_guess.iter().all(Option::is_some)
    }

    pub fn is_guess_empty(&self) -> bool {
        self.current_guess.iter().all(Option::is_none)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_over() && self.is_guess_complete()
    }

    /// Fill the leftmost empty slot with `color`.
    pub fn select_color(mut self, color: Color) -> Self {
        debug_assert!(
            self.settings.palette.contains(&color),
            "{} is not in the palette",
            color
        );
        if self.is_over() {
            return self;
        }
        if let Some(slot) = self.current_guess.iter_mut().find(|s| s.is_none()) {
            *slot = Some(color);
        }
        self
    }

    /// Empty slot `index`. Panics if `index` is out of range.
    pub fn clear_slot(mut self, index: usize) -> Self {
        assert!(
            index < self.current_guess.len(),
            "slot index {} out of range for code length {}",
            index,
            self.current_guess.len()
        );
        if self.is_over() {
            return self;
        }
        self.current_guess[index] = None;
        self
    }

    pub fn clear_current_guess(mut self) -> Self {
        if self.is_over() {
            return self;
        }
        self.current_guess.fill(None);
        self
    }

    /// Score the current guess and record it.
    pub fn submit_guess(mut self) -> Self {
        if !self.can_submit() {
            tracing::debug!(
                over = self.is_over(),
                complete = self.is_guess_complete(),
                "Submit ignored"
            );
            return self;
        }

        let guess = Code::new(self.current_guess.iter().flatten().copied().collect());
        let feedback = score_with(&self.secret, &guess, self.settings.feedback);
        let solved = feedback.is_solved();

        tracing::debug!(
            attempt = self.history.len() + 1,
            correct = feedback.correct(),
            wrong_position = feedback.wrong_position(),
            "Guess scored"
        );

        self.history.push(GuessRecord::new(guess, feedback));
        self.current_guess.fill(None);

        if solved {
            self.status = GameStatus::Won;
            tracing::info!(attempts = self.history.len(), "Game won");
        } else if self.history.len() >= self.settings.max_attempts {
            self.status = GameStatus::Lost;
            tracing::info!(attempts = self.history.len(), "Game lost");
        }
        self
    }
}
