//! Rows and columns of a face, which are the unit of transfer between faces.

use smallvec::SmallVec;

use crate::Face;

/// Owned copy of one row or column of stickers.
///
/// Rows are read left to right and columns top to bottom, as seen from
/// outside the cube. A line never aliases the grid it was read from.
pub type Line = SmallVec<[crate::Color; 8]>;

/// Whether a line is a row or a column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Orientation {
    /// Horizontal line.
    Row,
    /// Vertical line.
    Column,
}

/// Position of a line within a face, independent of the side length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LineIndex {
    /// Row or column 0.
    First,
    /// Center row or column. Only exists when the side length is odd.
    Middle,
    /// Row or column `N - 1`.
    Last,
}

impl LineIndex {
    /// Returns the numeric index of the line on a face with the given side
    /// length, or `None` if there is no such line.
    pub fn resolve(self, side_length: usize) -> Option<usize> {
        match self {
            LineIndex::First => (side_length > 0).then_some(0),
            LineIndex::Middle => (side_length % 2 == 1).then_some(side_length / 2),
            LineIndex::Last => side_length.checked_sub(1),
        }
    }
}

/// Symbolic reference to a line on a particular face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LineRef {
    /// Face containing the line.
    pub face: Face,
    /// Whether the line is a row or a column.
    pub orientation: Orientation,
    /// Which row or column.
    pub index: LineIndex,
}

impl LineRef {
    /// Constructs a reference to a row.
    pub const fn row(face: Face, index: LineIndex) -> Self {
        Self {
            face,
            orientation: Orientation::Row,
            index,
        }
    }

    /// Constructs a reference to a column.
    pub const fn column(face: Face, index: LineIndex) -> Self {
        Self {
            face,
            orientation: Orientation::Column,
            index,
        }
    }
}
