use super::Color;
use crate::error::{MastermindError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Index, str::FromStr};

/// An ordered sequence of colors, used for both the secret and guesses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(Vec<Color>);

impl Code {
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.0.iter()
    }

    /// Parse a code and check it against the expected length and palette.
    pub fn parse_for(input: &str, length: usize, palette: &[Color]) -> Result<Self> {
        let code: Code = input.parse()?;
        if code.len() != length {
            return Err(MastermindError::InvalidCode(format!(
                "expected {} colors, got {}",
                length,
                code.len()
            )));
        }
        if let Some(outside) = code.iter().find(|c| !palette.contains(c)) {
            return Err(MastermindError::InvalidColor(format!(
                "{} is not in the palette",
                outside
            )));
        }
        Ok(code)
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl<const N: usize> From<[Color; N]> for Code {
    fn from(colors: [Color; N]) -> Self {
        Self(colors.to_vec())
    }
}

impl Index<usize> for Code {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Code {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|c| c.name()).collect();
        write!(f, "{}", names.join(" "))
    }
}

/// Accepts color names or aliases separated by whitespace and/or commas.
impl FromStr for Code {
    type Err = MastermindError;

    fn from_str(s: &str) -> Result<Self> {
        let colors = s
            .split(|ch: char| ch == ',' || ch.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Color>>>()?;
        if colors.is_empty() {
            return Err(MastermindError::InvalidCode("no colors given".to_string()));
        }
        Ok(Self(colors))
    }
}
