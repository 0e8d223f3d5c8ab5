use crate::model::{Code, Color, Feedback, PegResult};
use std::collections::HashMap;

/// How peg results are laid out in a [`Feedback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackLayout {
    /// All `Correct`, then all `WrongPosition`, then `Incorrect` padding.
    /// Positions are not recoverable from the result.
    #[default]
    Grouped,
    /// One result per guess position.
    Positional,
}

/// Score `guess` against `secret` with the default grouped layout.
///
/// Panics if the lengths differ.
pub fn score(secret: &Code, guess: &Code) -> Feedback {
    score_with(secret, guess, FeedbackLayout::Grouped)
}

pub fn score_with(secret: &Code, guess: &Code, layout: FeedbackLayout) -> Feedback {
    assert_eq!(
        secret.len(),
        guess.len(),
        "guess length must match secret length"
    );

    let grades = grade(secret, guess);
    match layout {
        FeedbackLayout::Positional => Feedback::new(grades),
        FeedbackLayout::Grouped => {
            let mut results = Vec::with_capacity(grades.len());
            results.extend(grades.iter().filter(|g| **g == PegResult::Correct));
            results.extend(grades.iter().filter(|g| **g == PegResult::WrongPosition));
            results.resize(grades.len(), PegResult::Incorrect);
            Feedback::new(results)
        }
    }
}

/// Two-pass grading with exact multiset accounting, one result per position.
fn grade(secret: &Code, guess: &Code) -> Vec<PegResult> {
    let mut remaining: HashMap<Color, usize> = HashMap::new();
    for color in secret {
        *remaining.entry(*color).or_default() += 1;
    }

    let mut grades = vec![PegResult::Incorrect; guess.len()];

    // exact matches claim their count before any partial match can
    for ((g, s), grade) in guess.iter().zip(secret).zip(&mut grades) {
        if g == s {
            *grade = PegResult::Correct;
            if let Some(n) = remaining.get_mut(g) {
                *n -= 1;
            }
        }
    }

    for ((g, s), grade) in guess.iter().zip(secret).zip(&mut grades) {
        if g == s {
            continue;
        }
        if let Some(n) = remaining.get_mut(g) {
            if *n > 0 {
                *n -= 1;
                *grade = PegResult::WrongPosition;
            }
        }
    }

    grades
}
