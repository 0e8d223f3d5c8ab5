use crate::error::{MastermindError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A peg color.
///
/// The first six variants form the classic palette; the rest exist so a
/// custom [`GameSettings`](crate::config::GameSettings) can widen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Cyan,
    White,
    Brown,
}

impl Color {
    pub const ALL: [Color; 10] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
        Color::Pink,
        Color::Cyan,
        Color::White,
        Color::Brown,
    ];

    /// The six colors of the standard game, in display order.
    pub const CLASSIC: [Color; 6] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Pink => "pink",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Brown => "brown",
        }
    }

    /// Single-letter shorthand accepted on the command line.
    ///
    /// Only the classic colors get one; the extended colors would collide.
    pub fn alias(&self) -> Option<char> {
        match self {
            Color::Red => Some('r'),
            Color::Blue => Some('b'),
            Color::Green => Some('g'),
            Color::Yellow => Some('y'),
            Color::Purple => Some('p'),
            Color::Orange => Some('o'),
            _ => None,
        }
    }

    /// RGB value used by both frontends (Tailwind 500 shades).
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Red => (239, 68, 68),
            Color::Blue => (59, 130, 246),
            Color::Green => (34, 197, 94),
            Color::Yellow => (234, 179, 8),
            Color::Purple => (168, 85, 247),
            Color::Orange => (249, 115, 22),
            Color::Pink => (236, 72, 153),
            Color::Cyan => (6, 182, 212),
            Color::White => (241, 245, 249),
            Color::Brown => (146, 64, 14),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Color {
    type Err = MastermindError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| {
                c.name() == needle
                    || c.alias().is_some_and(|a| needle.len() == 1 && needle.starts_with(a))
            })
            .ok_or_else(|| MastermindError::InvalidColor(s.to_string()))
    }
}
