//! Sticker colors and the standard color scheme.

use std::fmt;
use std::str::FromStr;

use strum::EnumIter;

use crate::{CubeError, Face, PerFace};

/// Sticker color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Color {
    /// White (`W`).
    White,
    /// Yellow (`Y`).
    Yellow,
    /// Green (`G`).
    Green,
    /// Blue (`B`).
    Blue,
    /// Orange (`O`).
    Orange,
    /// Red (`R`).
    Red,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Color {
    type Err = CubeError;

    /// Parses a color from its one-letter symbol or its full name, ignoring
    /// case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let from_symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c),
            _ => None,
        };
        from_symbol
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|c| c.name().eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| CubeError::InvalidColor(s.to_owned()))
    }
}

impl Color {
    /// All colors.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Red,
    ];

    /// Returns the one-letter symbol for the color.
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }

    /// Returns the full name of the color.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Orange => "Orange",
            Color::Red => "Red",
        }
    }

    /// Returns the color with the given one-letter symbol, ignoring case.
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.symbol() == c.to_ascii_uppercase())
    }

    /// Returns the standard color scheme: white on top, green in front.
    pub fn default_scheme() -> PerFace<Color> {
        PerFace::from_fn(|face| match face {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
        })
    }
}
