//! Turns of the internal layers between opposite faces.
//!
//! A slice has no face of its own. Turning it cycles the middle line of each
//! of the four faces it passes through and rotates no face grid. The faces do
//! not all share an orientation, so the standing slice mixes rows and columns
//! and some steps reverse the line.

use std::fmt;
use std::str::FromStr;

use strum::EnumIter;

use crate::Face::{Back, Down, Front, Left, Right, Up};
use crate::LineIndex::Middle;
use crate::transfer::{TransferCycle, col, cycle_lines, row, step};
use crate::{CubeError, CubeState, Direction, Face};

/// Internal layer of an odd-sized cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Slice {
    /// Layer between Left and Right (`M`), turning in the same direction as
    /// Left.
    Middle = 0,
    /// Layer between Up and Down (`E`), turning in the same direction as
    /// Down.
    Equator = 1,
    /// Layer between Front and Back (`S`), turning in the same direction as
    /// Front.
    Standing = 2,
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Slice {
    type Err = CubeError;

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
                    .find(|sl| sl.name().eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| CubeError::InvalidFaceOrSlice(s.to_owned()))
    }
}

impl Slice {
    /// All slices.
    pub const ALL: [Slice; 3] = [Slice::Middle, Slice::Equator, Slice::Standing];

    /// Returns the one-letter notation symbol for the slice.
    pub const fn symbol(self) -> char {
        match self {
            Slice::Middle => 'M',
            Slice::Equator => 'E',
            Slice::Standing => 'S',
        }
    }

    /// Returns the full name of the slice.
    pub const fn name(self) -> &'static str {
        match self {
            Slice::Middle => "Middle",
            Slice::Equator => "Equator",
            Slice::Standing => "Standing",
        }
    }

    /// Returns the slice with the given one-letter symbol, ignoring case.
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|sl| sl.symbol() == c.to_ascii_uppercase())
    }

    /// Returns the face whose clockwise turn this slice follows.
    pub const fn reference_face(self) -> Face {
        match self {
            Slice::Middle => Face::Left,
            Slice::Equator => Face::Down,
            Slice::Standing => Face::Front,
        }
    }

    /// Returns the two faces parallel to the slice, which it never touches.
    pub const fn parallel_faces(self) -> [Face; 2] {
        let face = self.reference_face();
        [face, face.opposite()]
    }

    /// Returns whether the slice exists on a cube with the given side length.
    pub const fn exists_at(side_length: usize) -> bool {
        side_length % 2 == 1
    }
}

/// Line cycles for slice turns, indexed by slice and then by direction.
static SLICE_TURN_TABLE: [[TransferCycle; 2]; 3] = [
    // Middle
    [
        [
            step(col(Up, Middle), col(Front, Middle), false),
            step(col(Front, Middle), col(Down, Middle), false),
            step(col(Down, Middle), col(Back, Middle), true),
            step(col(Back, Middle), col(Up, Middle), true),
        ],
        [
            step(col(Up, Middle), col(Back, Middle), true),
            step(col(Back, Middle), col(Down, Middle), true),
            step(col(Down, Middle), col(Front, Middle), false),
            step(col(Front, Middle), col(Up, Middle), false),
        ],
    ],
    // Equator
    [
        [
            step(row(Left, Middle), row(Front, Middle), false),
            step(row(Front, Middle), row(Right, Middle), false),
            step(row(Right, Middle), row(Back, Middle), false),
            step(row(Back, Middle), row(Left, Middle), false),
        ],
        [
            step(row(Left, Middle), row(Back, Middle), false),
            step(row(Back, Middle), row(Right, Middle), false),
            step(row(Right, Middle), row(Front, Middle), false),
            step(row(Front, Middle), row(Left, Middle), false),
        ],
    ],
    // Standing
    [
        [
            step(row(Up, Middle), col(Right, Middle), false),
            step(col(Right, Middle), row(Down, Middle), true),
            step(row(Down, Middle), col(Left, Middle), false),
            step(col(Left, Middle), row(Up, Middle), true),
        ],
        [
            step(row(Up, Middle), col(Left, Middle), true),
            step(col(Left, Middle), row(Down, Middle), false),
            step(row(Down, Middle), col(Right, Middle), true),
            step(col(Right, Middle), row(Up, Middle), false),
        ],
    ],
];

/// Returns the line cycle for turning a slice in a direction.
pub fn slice_turn_cycle(slice: Slice, direction: Direction) -> &'static TransferCycle {
    &SLICE_TURN_TABLE[slice as usize][direction.index()]
}

/// Turns an internal layer of the cube.
///
/// Returns an error without modifying the cube if the side length is even,
/// because there is no single middle layer.
pub fn turn_slice(
    state: &mut CubeState,
    slice: Slice,
    direction: Direction,
) -> Result<(), CubeError> {
    let side_length = state.side_length();
    if !Slice::exists_at(side_length) {
        return Err(CubeError::SliceUnavailable { slice, side_length });
    }
    cycle_lines(state, slice_turn_cycle(slice, direction));
    Ok(())
}
