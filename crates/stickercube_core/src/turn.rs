//! Turns and their dispatch to face and slice primitives.

use std::fmt;
use std::str::FromStr;

use crate::{CubeError, CubeState, Face, Slice, rotate_face, transfer_edges, turn_slice};

/// Rotation direction, as seen from outside the face that a turn follows.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Direction {
    /// Clockwise.
    #[default]
    Clockwise = 0,
    /// Counterclockwise.
    CounterClockwise = 1,
}

impl fmt::Display for Direction {
    /// Writes the notation suffix for the direction: nothing for clockwise and
    /// `'` for counterclockwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => Ok(()),
            Direction::CounterClockwise => write!(f, "'"),
        }
    }
}

impl FromStr for Direction {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "cw" | "clockwise" => Ok(Direction::Clockwise),
            "'" | "ccw" | "counterclockwise" => Ok(Direction::CounterClockwise),
            _ => Err(CubeError::InvalidDirection(s.to_owned())),
        }
    }
}

impl Direction {
    /// Returns the reverse direction.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Returns the index of the direction in turn tables.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Layer that can be turned: either a face or an internal slice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Layer {
    /// Outer layer, including the face's own grid.
    Face(Face),
    /// Internal layer.
    Slice(Slice),
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Layer {
    type Err = CubeError;

    /// Parses a layer from a one-letter symbol or a face or slice name,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse()
            .map(Layer::Face)
            .or_else(|_| s.parse().map(Layer::Slice))
    }
}

impl From<Face> for Layer {
    fn from(face: Face) -> Self {
        Layer::Face(face)
    }
}

impl From<Slice> for Layer {
    fn from(slice: Slice) -> Self {
        Layer::Slice(slice)
    }
}

impl Layer {
    /// Returns the one-letter notation symbol for the layer.
    pub const fn symbol(self) -> char {
        match self {
            Layer::Face(face) => face.symbol(),
            Layer::Slice(slice) => slice.symbol(),
        }
    }

    /// Returns the layer with the given one-letter symbol, ignoring case.
    pub fn from_symbol(c: char) -> Option<Self> {
        Face::from_symbol(c)
            .map(Layer::Face)
            .or_else(|| Slice::from_symbol(c).map(Layer::Slice))
    }

    /// Returns whether the layer can be turned on a cube with the given side
    /// length.
    pub fn exists_at(self, side_length: usize) -> bool {
        match self {
            Layer::Face(_) => side_length > 0,
            Layer::Slice(_) => Slice::exists_at(side_length),
        }
    }
}

/// Largest repeat count that can be written as a single notation token.
pub const MAX_REPEAT: u32 = 9;

/// Turn of one layer in one direction, repeated some number of times.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    /// Layer to turn.
    pub layer: Layer,
    /// Direction to turn the layer.
    pub direction: Direction,
    /// Number of quarter turns, at least 1.
    repeat: u32,
}

impl fmt::Display for Turn {
    /// Writes the turn as a single notation token, such as `R`, `U'`, or `F2`.
    ///
    /// A turn that has no token of its own, such as two counterclockwise
    /// quarter turns, is written as the equivalent token from
    /// [`Turn::canonical()`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let turn = self.canonical();
        write!(f, "{}", turn.layer)?;
        if turn.repeat != 1 {
            write!(f, "{}", turn.repeat)?;
        }
        write!(f, "{}", turn.direction)
    }
}

impl Turn {
    /// Constructs a quarter turn.
    pub fn new(layer: impl Into<Layer>, direction: Direction) -> Self {
        Self {
            layer: layer.into(),
            direction,
            repeat: 1,
        }
    }

    /// Returns the same turn repeated `repeat` times.
    ///
    /// Returns an error if `repeat` is zero.
    pub fn with_repeat(self, repeat: u32) -> Result<Self, CubeError> {
        if repeat == 0 {
            return Err(CubeError::ZeroRepeat);
        }
        Ok(Self { repeat, ..self })
    }

    /// Returns the number of quarter turns.
    pub fn repeat(self) -> u32 {
        self.repeat
    }

    /// Returns the net number of clockwise quarter turns, from 0 to 3.
    pub fn clockwise_quarter_turns(self) -> u32 {
        match self.direction {
            Direction::Clockwise => self.repeat % 4,
            Direction::CounterClockwise => (4 - self.repeat % 4) % 4,
        }
    }

    /// Returns the turn of `layer` with the given net number of clockwise
    /// quarter turns that is written as a single token.
    ///
    /// Three quarter turns are written as one counterclockwise quarter turn,
    /// and zero as four clockwise quarter turns.
    fn from_clockwise_quarter_turns(layer: Layer, quarter_turns: u32) -> Self {
        let cw = Self::new(layer, Direction::Clockwise);
        match quarter_turns % 4 {
            0 => Self { repeat: 4, ..cw },
            3 => Self::new(layer, Direction::CounterClockwise),
            n => Self { repeat: n, ..cw },
        }
    }

    /// Returns an equivalent turn that can be written as a single token.
    ///
    /// A quarter turn or a clockwise turn with a repeat count up to
    /// [`MAX_REPEAT`] is returned unchanged.
    #[must_use]
    pub fn canonical(self) -> Self {
        let has_token = self.repeat == 1
            || (self.direction == Direction::Clockwise && self.repeat <= MAX_REPEAT);
        if has_token {
            self
        } else {
            Self::from_clockwise_quarter_turns(self.layer, self.clockwise_quarter_turns())
        }
    }

    /// Returns a turn that undoes this one and can be written as a single
    /// token.
    ///
    /// `R` inverts to `R'`, `R'` to `R`, `R2` to `R2`, and `R3` to `R`. A turn
    /// with no net effect, such as `R4`, inverts to `R4`.
    #[must_use]
    pub fn rev(self) -> Self {
        let quarter_turns = 4 - self.clockwise_quarter_turns();
        Self::from_clockwise_quarter_turns(self.layer, quarter_turns)
    }

    /// Returns an error if the turn cannot be applied to a cube with the
    /// given side length.
    pub fn check(self, side_length: usize) -> Result<(), CubeError> {
        match self.layer {
            Layer::Slice(slice) if !self.layer.exists_at(side_length) => {
                Err(CubeError::SliceUnavailable { slice, side_length })
            }
            _ => Ok(()),
        }
    }
}

/// Applies a turn to the cube.
///
/// Face turns move the adjacent boundary lines and rotate the face's own grid.
/// Slice turns move the middle lines of the four faces they pass through. The
/// single quarter turn is repeated `turn.repeat` times.
///
/// Returns an error without modifying the cube if the turn does not exist at
/// the cube's side length.
pub fn apply_turn(state: &mut CubeState, turn: Turn) -> Result<(), CubeError> {
    turn.check(state.side_length())?;
    log::trace!("applying turn {turn}");
    for _ in 0..turn.repeat {
        match turn.layer {
            Layer::Face(face) => {
                transfer_edges(state, face, turn.direction);
                rotate_face(state, face, turn.direction);
            }
            Layer::Slice(slice) => turn_slice(state, slice, turn.direction)?,
        }
    }
    Ok(())
}

/// Applies a sequence of turns to the cube, in order.
///
/// Every turn is checked before any is applied, so on error the cube is left
/// unmodified.
pub fn apply_turns<'a>(
    state: &mut CubeState,
    turns: impl IntoIterator<Item = &'a Turn>,
) -> Result<(), CubeError> {
    let turns: Vec<Turn> = turns.into_iter().copied().collect();
    for turn in &turns {
        turn.check(state.side_length())?;
    }
    for turn in turns {
        apply_turn(state, turn)?;
    }
    Ok(())
}
