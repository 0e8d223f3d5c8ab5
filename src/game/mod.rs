//! Game logic: secret generation, scoring, and the state machine.

mod generator;
mod scorer;
mod session;
mod state;

pub use generator::generate;
pub use scorer::{FeedbackLayout, score, score_with};
pub use session::{Session, Tally};
pub use state::{GameState, GameStatus};
