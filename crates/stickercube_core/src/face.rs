//! Faces of the cube and fixed-size per-face storage.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use strum::EnumIter;

use crate::CubeError;

/// Face of the cube.
///
/// Faces are a closed set, so looking up a face's grid can never fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Face {
    /// Top face.
    Up = 0,
    /// Bottom face.
    Down = 1,
    /// Left face.
    Left = 2,
    /// Right face.
    Right = 3,
    /// Face towards the viewer.
    Front = 4,
    /// Face away from the viewer.
    Back = 5,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Face {
    type Err = CubeError;

    /// Parses a face from its one-letter symbol or its full name, ignoring
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
                    .find(|f| f.name().eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| CubeError::InvalidFaceOrSlice(s.to_owned()))
    }
}

impl Face {
    /// All faces, in storage order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    /// Returns the index of the face in [`Face::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the one-letter notation symbol for the face.
    pub const fn symbol(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    /// Returns the full name of the face.
    pub const fn name(self) -> &'static str {
        match self {
            Face::Up => "Up",
            Face::Down => "Down",
            Face::Left => "Left",
            Face::Right => "Right",
            Face::Front => "Front",
            Face::Back => "Back",
        }
    }

    /// Returns the face with the given one-letter symbol, ignoring case.
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.symbol() == c.to_ascii_uppercase())
    }

    /// Returns the face on the opposite side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }
}

/// One value for each face of the cube.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct PerFace<T>([T; 6]);

impl<T> Index<Face> for PerFace<T> {
    type Output = T;

    fn index(&self, face: Face) -> &T {
        &self.0[face.index()]
    }
}

impl<T> IndexMut<Face> for PerFace<T> {
    fn index_mut(&mut self, face: Face) -> &mut T {
        &mut self.0[face.index()]
    }
}

impl<T> PerFace<T> {
    /// Constructs a collection by calling `f` once for each face.
    pub fn from_fn(f: impl FnMut(Face) -> T) -> Self {
        Self(Face::ALL.map(f))
    }

    /// Returns an iterator over faces and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.into_iter().zip(&self.0)
    }

    /// Returns a collection containing the result of `f` applied to each
    /// face and its value.
    pub fn map<U>(self, mut f: impl FnMut(Face, T) -> U) -> PerFace<U> {
        let [u, d, l, r, front, back] = self.0;
        PerFace([
            f(Face::Up, u),
            f(Face::Down, d),
            f(Face::Left, l),
            f(Face::Right, r),
            f(Face::Front, front),
            f(Face::Back, back),
        ])
    }
}
