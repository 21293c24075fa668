//! Square sticker grid of a single face.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use itertools::Itertools;

use crate::{Color, CubeError, Line, Orientation};

/// Square grid of stickers on one face, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    side_length: usize,
    cells: Vec<Color>,
}

impl Index<[usize; 2]> for Grid {
    type Output = Color;

    fn index(&self, [row, col]: [usize; 2]) -> &Color {
        &self.cells[self.cell_index(row, col)]
    }
}

impl IndexMut<[usize; 2]> for Grid {
    fn index_mut(&mut self, [row, col]: [usize; 2]) -> &mut Color {
        let i = self.cell_index(row, col);
        &mut self.cells[i]
    }
}

impl fmt::Display for Grid {
    /// Writes each row as a string of color symbols, with rows separated by
    /// spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows().map(|row| row.iter().join(""));
        write!(f, "{}", rows.format(" "))
    }
}

impl FromStr for Grid {
    type Err = CubeError;

    /// Parses a grid from whitespace-separated rows of color symbols, such as
    /// `"WWW WGW WWW"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split_whitespace()
            .map(|row| {
                row.chars()
                    .map(|c| Color::from_symbol(c).ok_or_else(|| CubeError::InvalidColor(c.into())))
                    .collect::<Result<Vec<Color>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl Grid {
    /// Constructs a grid with every sticker the same color.
    pub fn filled(side_length: usize, color: Color) -> Self {
        Self {
            side_length,
            cells: vec![color; side_length * side_length],
        }
    }

    /// Constructs a grid from a list of rows.
    ///
    /// Returns an error if the rows do not form a square.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self, CubeError> {
        let side_length = rows.len();
        if let Some(bad_row) = rows.iter().find(|row| row.len() != side_length) {
            return Err(CubeError::DimensionMismatch {
                expected: side_length,
                rows: side_length,
                columns: bad_row.len(),
            });
        }
        Ok(Self {
            side_length,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns the number of rows, which is also the number of columns.
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Returns an iterator over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // `chunks()` panics on a chunk size of zero.
        self.cells.chunks(self.side_length.max(1))
    }

    /// Returns the rows of the grid as owned vectors.
    pub fn to_rows(&self) -> Vec<Vec<Color>> {
        self.rows().map(<[Color]>::to_vec).collect()
    }

    /// Returns an iterator over every sticker in row-major order.
    pub fn stickers(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().copied()
    }

    /// Returns whether every sticker in the grid is the same color.
    pub fn is_uniform(&self) -> bool {
        self.cells.iter().all_equal()
    }

    /// Returns a copy of row or column `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn line(&self, orientation: Orientation, index: usize) -> Line {
        assert!(index < self.side_length, "line index {index} out of range");
        (0..self.side_length)
            .map(|k| self[Self::line_cell(orientation, index, k)])
            .collect()
    }

    /// Overwrites row or column `index` with `line`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or `line` has the wrong length.
    pub fn set_line(&mut self, orientation: Orientation, index: usize, line: &[Color]) {
        assert!(index < self.side_length, "line index {index} out of range");
        assert_eq!(line.len(), self.side_length, "wrong line length");
        for (k, &color) in line.iter().enumerate() {
            self[Self::line_cell(orientation, index, k)] = color;
        }
    }

    /// Mirrors the grid across its main diagonal.
    pub fn transpose(&mut self) {
        let n = self.side_length;
        for row in 0..n {
            for col in row + 1..n {
                self.cells.swap(row * n + col, col * n + row);
            }
        }
    }

    /// Reverses the order of stickers within each row.
    pub fn reverse_rows(&mut self) {
        for row in self.cells.chunks_mut(self.side_length.max(1)) {
            row.reverse();
        }
    }

    /// Reverses the order of stickers within each column.
    pub fn reverse_columns(&mut self) {
        let n = self.side_length;
        for row in 0..n / 2 {
            for col in 0..n {
                self.cells.swap(row * n + col, (n - 1 - row) * n + col);
            }
        }
    }

    fn line_cell(orientation: Orientation, index: usize, k: usize) -> [usize; 2] {
        match orientation {
            Orientation::Row => [index, k],
            Orientation::Column => [k, index],
        }
    }

    fn cell_index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.side_length && col < self.side_length,
            "cell ({row}, {col}) out of range for {n}x{n} grid",
            n = self.side_length,
        );
        row * self.side_length + col
    }
}
