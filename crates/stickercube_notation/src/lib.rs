//! Move notation for sticker cubes.
//!
//! A sequence is a whitespace-separated list of tokens. Each token is one
//! layer letter (`U D L R F B` for faces, `M E S` for slices), in either case,
//! followed by at most one modifier:
//!
//! - nothing, for a clockwise quarter turn
//! - `'`, for a counterclockwise quarter turn
//! - a digit from `2` to `9`, for that many clockwise quarter turns
//!
//! ```rust
//! use stickercube_core::{Direction, Face, Turn};
//! use stickercube_notation::*;
//!
//! let turns = parse_notation("R U' F2").unwrap();
//! assert_eq!(turns[1], Turn::new(Face::Up, Direction::CounterClockwise));
//! assert_eq!(write_notation(&invert_notation(&turns)), "F2 U R'");
//! ```

use itertools::Itertools;
use stickercube_core::Turn;

mod errors;
mod parse;

pub use errors::ParseError;
pub use parse::{parse_notation, parse_token};

/// Byte range of a token within a notation string.
pub type Span = chumsky::span::SimpleSpan;

/// Writes a sequence of turns as notation, separated by single spaces.
///
/// Any sequence returned by [`parse_notation()`] or [`invert_notation()`]
/// parses back to the same sequence.
pub fn write_notation(turns: &[Turn]) -> String {
    turns.iter().join(" ")
}

/// Returns the sequence that undoes `turns`: the same turns in reverse order,
/// each one replaced by [`Turn::rev()`].
///
/// Every turn in the result can be written as a single token, so the result
/// can always be passed to [`write_notation()`] and parsed back.
pub fn invert_notation(turns: &[Turn]) -> Vec<Turn> {
    turns.iter().rev().map(|turn| turn.rev()).collect()
}
