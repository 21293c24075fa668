//! Errors produced by cube construction and turns.

use thiserror::Error;

use crate::Slice;

/// Error produced when constructing or turning a cube.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CubeError {
    /// Identifier does not name a face or slice.
    #[error("unknown face or slice {0:?}")]
    InvalidFaceOrSlice(String),
    /// Symbol does not name a sticker color.
    #[error("unknown color {0:?}")]
    InvalidColor(String),
    /// String does not name a turn direction.
    #[error("unknown turn direction {0:?}")]
    InvalidDirection(String),
    /// Grid is not square or does not match the side length of the cube.
    #[error("expected {expected}x{expected} grid, found {rows} rows and a row of length {columns}")]
    DimensionMismatch {
        /// Side length of the cube.
        expected: usize,
        /// Number of rows in the supplied grid.
        rows: usize,
        /// Length of the first row with the wrong length, or of the first
        /// row if the row count is wrong.
        columns: usize,
    },
    /// Turn repeated zero times.
    #[error("turn must be repeated at least once")]
    ZeroRepeat,
    /// Side length of zero.
    #[error("side length must be at least 1")]
    ZeroSideLength,
    /// Slice turn on a cube with no single middle layer.
    #[error(
        "{slice} slice requires an odd side length, but the cube has side length {side_length}"
    )]
    SliceUnavailable {
        /// Requested slice.
        slice: Slice,
        /// Side length of the cube.
        side_length: usize,
    },
}
