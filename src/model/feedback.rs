use super::Code;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single peg of a scored guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PegResult {
    /// Right color, right position
    Correct,
    /// Right color, wrong position
    WrongPosition,
    /// No remaining match for this color
    Incorrect,
}

impl fmt::Display for PegResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PegResult::Correct => write!(f, "correct"),
            PegResult::WrongPosition => write!(f, "wrong-position"),
            PegResult::Incorrect => write!(f, "incorrect"),
        }
    }
}

/// The full set of peg results for one guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback(Vec<PegResult>);

impl Feedback {
    pub fn new(results: Vec<PegResult>) -> Self {
        Self(results)
    }

    pub fn results(&self) -> &[PegResult] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn count(&self, kind: PegResult) -> usize {
        self.0.iter().filter(|r| **r == kind).count()
    }

    pub fn correct(&self) -> usize {
        self.count(PegResult::Correct)
    }

    pub fn wrong_position(&self) -> usize {
        self.count(PegResult::WrongPosition)
    }

    pub fn incorrect(&self) -> usize {
        self.count(PegResult::Incorrect)
    }

    /// True when every peg is `Correct`.
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|r| *r == PegResult::Correct)
    }
}

/// A submitted guess together with its feedback. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    guess: Code,
    feedback: Feedback,
}

impl GuessRecord {
    pub fn new(guess: Code, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    pub fn guess(&self) -> &Code {
        &self.guess
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}
