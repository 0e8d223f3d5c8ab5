use crate::model::{Code, Color};
use rand::Rng;

/// Draw a secret code: each position independently and uniformly from
/// `palette`, with repetition.
///
/// Panics if `length` is zero or `palette` is empty.
pub fn generate<R: Rng>(length: usize, palette: &[Color], rng: &mut R) -> Code {
    assert!(length >= 1, "code length must be at least 1");
    assert!(!palette.is_empty(), "palette must not be empty");

    (0..length)
        .map(|_| palette[rng.random_range(0..palette.len())])
        .collect::<Vec<_>>()
        .into()
}
