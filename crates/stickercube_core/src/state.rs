//! Complete sticker state of a cube.

use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;

use crate::{Color, CubeError, DEFAULT_SIDE_LENGTH, Face, Grid, Line, Orientation, PerFace};

/// Stickers on all six faces of an NxNxN cube.
///
/// Every face grid is exactly `side_length` by `side_length`. Turns preserve
/// the number of stickers of each color, but arbitrary layouts (including
/// physically impossible ones) may be supplied at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    side_length: usize,
    faces: PerFace<Grid>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved_unchecked(DEFAULT_SIDE_LENGTH, &Color::default_scheme())
    }
}

impl fmt::Display for CubeState {
    /// Writes the unfolded net of the cube: Up above Front, then one line per
    /// row of Left, Front, Right, and Back, then Down below Front.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = " ".repeat(self.side_length * 2);
        let row_str = |row: &[Color]| row.iter().join(" ");

        for row in self.faces[Face::Up].rows() {
            writeln!(f, "{indent}{}", row_str(row))?;
        }
        let belt = [Face::Left, Face::Front, Face::Right, Face::Back];
        for i in 0..self.side_length {
            let line = belt
                .iter()
                .map(|&face| row_str(self.faces[face].line(Orientation::Row, i).as_slice()))
                .join(" ");
            writeln!(f, "{line}")?;
        }
        for row in self.faces[Face::Down].rows() {
            writeln!(f, "{indent}{}", row_str(row))?;
        }
        Ok(())
    }
}

impl CubeState {
    /// Constructs a solved cube using the standard color scheme.
    ///
    /// Returns an error if `side_length` is zero.
    pub fn new(side_length: usize) -> Result<Self, CubeError> {
        Self::solved_with_scheme(side_length, &Color::default_scheme())
    }

    /// Constructs a solved cube where each face has the color given by
    /// `scheme`.
    ///
    /// Returns an error if `side_length` is zero.
    pub fn solved_with_scheme(
        side_length: usize,
        scheme: &PerFace<Color>,
    ) -> Result<Self, CubeError> {
        if side_length == 0 {
            return Err(CubeError::ZeroSideLength);
        }
        Ok(Self::solved_unchecked(side_length, scheme))
    }

    fn solved_unchecked(side_length: usize, scheme: &PerFace<Color>) -> Self {
        let faces = scheme
            .clone()
            .map(|_, color| Grid::filled(side_length, color));
        Self { side_length, faces }
    }

    /// Constructs a cube from an arbitrary layout of stickers.
    ///
    /// Returns an error if any grid is not `side_length` by `side_length`.
    pub fn from_faces(side_length: usize, faces: PerFace<Grid>) -> Result<Self, CubeError> {
        if side_length == 0 {
            return Err(CubeError::ZeroSideLength);
        }
        for (_, grid) in faces.iter() {
            check_dimensions(side_length, grid)?;
        }
        Ok(Self { side_length, faces })
    }

    /// Returns the number of stickers along each edge of a face.
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Returns the current sticker grids of all six faces.
    ///
    /// This is the snapshot consumed by renderers.
    pub fn faces(&self) -> &PerFace<Grid> {
        &self.faces
    }

    /// Returns the grid of one face.
    pub fn face(&self, face: Face) -> &Grid {
        &self.faces[face]
    }

    /// Returns a copy of the grid of one face.
    pub fn get_face(&self, face: Face) -> Grid {
        self.faces[face].clone()
    }

    /// Replaces the grid of one face.
    ///
    /// Returns an error if the grid has the wrong dimensions.
    pub fn set_face(&mut self, face: Face, grid: Grid) -> Result<(), CubeError> {
        check_dimensions(self.side_length, &grid)?;
        self.faces[face] = grid;
        Ok(())
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut Grid {
        &mut self.faces[face]
    }

    /// Returns a copy of row or column `index` of a face, optionally
    /// reversed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get_line(
        &self,
        face: Face,
        index: usize,
        orientation: Orientation,
        reverse: bool,
    ) -> Line {
        let mut line = self.faces[face].line(orientation, index);
        if reverse {
            line.reverse();
        }
        line
    }

    /// Overwrites row or column `index` of a face with `line`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or `line` has the wrong length.
    pub fn set_line(&mut self, face: Face, index: usize, orientation: Orientation, line: &[Color]) {
        self.faces[face].set_line(orientation, index, line);
    }

    /// Returns the number of stickers of each color across all faces.
    pub fn color_counts(&self) -> HashMap<Color, usize> {
        self.faces
            .iter()
            .flat_map(|(_, grid)| grid.stickers())
            .counts()
    }

    /// Returns whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|(_, grid)| grid.is_uniform())
    }
}

fn check_dimensions(side_length: usize, grid: &Grid) -> Result<(), CubeError> {
    if grid.side_length() == side_length {
        Ok(())
    } else {
        Err(CubeError::DimensionMismatch {
            expected: side_length,
            rows: grid.side_length(),
            columns: grid.side_length(),
        })
    }
}
