//! NxNxN sticker cube simulator.
//!
//! For convenience, this crate also re-exports all of `stickercube_core`.
//!
//! # Example
//!
//! ```rust
//! use stickercube::{Cube, Face};
//!
//! let mut cube = Cube::new();
//! cube.apply_notation("R").unwrap();
//! assert_eq!("WWG WWG WWG", cube.state().face(Face::Up).to_string());
//!
//! for _ in 0..6 {
//!     cube.apply_notation("R U R' U'").unwrap();
//! }
//! cube.apply_notation("R'").unwrap();
//! assert!(cube.is_solved());
//! ```

use std::fmt;

pub use stickercube_core::*;
pub use stickercube_notation as notation;
pub use stickercube_notation::ParseError;
use thiserror::Error;

/// Error produced by a [`Cube`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid cube construction or turn.
    #[error(transparent)]
    Cube(#[from] CubeError),
    /// Invalid move notation.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Cube that can be turned using move notation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    state: CubeState,
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}

impl From<CubeState> for Cube {
    fn from(state: CubeState) -> Self {
        Self::from_state(state)
    }
}

impl Cube {
    /// Constructs a solved 3x3x3 cube with the standard color scheme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a solved cube with the standard color scheme.
    pub fn with_side_length(side_length: usize) -> Result<Self, Error> {
        Ok(Self::from_state(CubeState::new(side_length)?))
    }

    /// Constructs a cube from an existing state.
    pub fn from_state(state: CubeState) -> Self {
        Self { state }
    }

    /// Constructs a cube from an arbitrary layout of stickers.
    pub fn from_faces(side_length: usize, faces: PerFace<Grid>) -> Result<Self, Error> {
        Ok(Self::from_state(CubeState::from_faces(side_length, faces)?))
    }

    /// Returns the current state of the cube.
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Returns the current state of the cube, consuming the cube.
    pub fn into_state(self) -> CubeState {
        self.state
    }

    /// Returns the number of stickers along each edge of a face.
    pub fn side_length(&self) -> usize {
        self.state.side_length()
    }

    /// Returns whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Applies a single turn.
    pub fn apply_turn(&mut self, turn: Turn) -> Result<(), Error> {
        Ok(apply_turn(&mut self.state, turn)?)
    }

    /// Applies a sequence of turns. On error, the cube is unmodified.
    pub fn apply_turns(&mut self, turns: &[Turn]) -> Result<(), Error> {
        Ok(apply_turns(&mut self.state, turns)?)
    }

    /// Parses a string of move notation and applies it, returning the turns
    /// that were applied.
    ///
    /// On error, the cube is unmodified.
    pub fn apply_notation(&mut self, notation: &str) -> Result<Vec<Turn>, Error> {
        let turns = stickercube_notation::parse_notation(notation)?;
        log::debug!(
            "applying {} turns to {n}x{n}x{n} cube",
            turns.len(),
            n = self.side_length(),
        );
        self.apply_turns(&turns)?;
        Ok(turns)
    }
}
