//! Data models for the game.
//!
//! - [`Color`]: a peg color
//! - [`Code`]: an ordered sequence of colors (secret or guess)
//! - [`PegResult`] / [`Feedback`]: the score of one guess
//! - [`GuessRecord`]: a submitted guess paired with its feedback

mod code;
mod color;
mod feedback;

pub use code::Code;
pub use color::Color;
pub use feedback::{Feedback, GuessRecord, PegResult};
