//! Transfer of boundary lines between the faces adjacent to a turn.
//!
//! Each turn moves four lines around a closed cycle. Step `k` of a cycle moves
//! its `from` line into its `to` line, and the `to` line of each step is the
//! `from` line of the next step, wrapping around at the end. Steps whose faces
//! meet with opposite traversal directions are marked `reverse`, and the line
//! is flipped in transit.
//!
//! Both directions of every turn are stored explicitly. The reversal flags of
//! one direction are not simply mirrored from the other.

use crate::Face::{Back, Down, Front, Left, Right, Up};
use crate::LineIndex::{First, Last};
use crate::{Color, CubeState, Direction, Face, Line, LineIndex, LineRef, Orientation};

/// One step of a four-line cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TransferStep {
    /// Line that is read.
    pub from: LineRef,
    /// Line that is overwritten.
    pub to: LineRef,
    /// Whether the line is flipped before it is written.
    pub reverse: bool,
}

/// Closed cycle of four line transfers.
pub type TransferCycle = [TransferStep; 4];

pub(crate) const fn step(from: LineRef, to: LineRef, reverse: bool) -> TransferStep {
    TransferStep { from, to, reverse }
}

pub(crate) const fn row(face: Face, index: LineIndex) -> LineRef {
    LineRef::row(face, index)
}
pub(crate) const fn col(face: Face, index: LineIndex) -> LineRef {
    LineRef::column(face, index)
}

/// Line cycles for face turns, indexed by face and then by direction.
static FACE_TURN_TABLE: [[TransferCycle; 2]; 6] = [
    // Up
    [
        [
            step(row(Left, First), row(Back, First), false),
            step(row(Back, First), row(Right, First), false),
            step(row(Right, First), row(Front, First), false),
            step(row(Front, First), row(Left, First), false),
        ],
        [
            step(row(Left, First), row(Front, First), false),
            step(row(Front, First), row(Right, First), false),
            step(row(Right, First), row(Back, First), false),
            step(row(Back, First), row(Left, First), false),
        ],
    ],
    // Down
    [
        [
            step(row(Left, Last), row(Front, Last), false),
            step(row(Front, Last), row(Right, Last), false),
            step(row(Right, Last), row(Back, Last), false),
            step(row(Back, Last), row(Left, Last), false),
        ],
        [
            step(row(Left, Last), row(Back, Last), false),
            step(row(Back, Last), row(Right, Last), false),
            step(row(Right, Last), row(Front, Last), false),
            step(row(Front, Last), row(Left, Last), false),
        ],
    ],
    // Left
    [
        [
            step(col(Up, First), col(Front, First), false),
            step(col(Front, First), col(Down, First), false),
            step(col(Down, First), col(Back, Last), true),
            step(col(Back, Last), col(Up, First), true),
        ],
        [
            step(col(Up, First), col(Back, Last), true),
            step(col(Back, Last), col(Down, First), true),
            step(col(Down, First), col(Front, First), false),
            step(col(Front, First), col(Up, First), false),
        ],
    ],
    // Right
    [
        [
            step(col(Up, Last), col(Back, First), true),
            step(col(Back, First), col(Down, Last), true),
            step(col(Down, Last), col(Front, Last), false),
            step(col(Front, Last), col(Up, Last), false),
        ],
        [
            step(col(Up, Last), col(Front, Last), false),
            step(col(Front, Last), col(Down, Last), false),
            step(col(Down, Last), col(Back, First), true),
            step(col(Back, First), col(Up, Last), true),
        ],
    ],
    // Front
    [
        [
            step(row(Up, Last), col(Right, First), false),
            step(col(Right, First), row(Down, First), true),
            step(row(Down, First), col(Left, Last), false),
            step(col(Left, Last), row(Up, Last), true),
        ],
        [
            step(row(Up, Last), col(Left, Last), true),
            step(col(Left, Last), row(Down, First), false),
            step(row(Down, First), col(Right, First), true),
            step(col(Right, First), row(Up, Last), false),
        ],
    ],
    // Back
    [
        [
            step(row(Up, First), col(Left, First), true),
            step(col(Left, First), row(Down, Last), false),
            step(row(Down, Last), col(Right, Last), true),
            step(col(Right, Last), row(Up, First), false),
        ],
        [
            step(row(Up, First), col(Right, Last), false),
            step(col(Right, Last), row(Down, Last), true),
            step(row(Down, Last), col(Left, First), false),
            step(col(Left, First), row(Up, First), true),
        ],
    ],
];

/// Returns the line cycle for turning a face in a direction.
pub fn face_turn_cycle(face: Face, direction: Direction) -> &'static TransferCycle {
    &FACE_TURN_TABLE[face.index()][direction.index()]
}

/// Moves the boundary lines of the four faces adjacent to `face`, as if that
/// face were turned. The face's own grid is not rotated.
pub fn transfer_edges(state: &mut CubeState, face: Face, direction: Direction) {
    cycle_lines(state, face_turn_cycle(face, direction));
}

/// Line with its index resolved against a particular side length.
#[derive(Debug, Copy, Clone)]
struct ResolvedLine {
    face: Face,
    orientation: Orientation,
    index: usize,
}

impl ResolvedLine {
    fn new(line: LineRef, side_length: usize) -> Self {
        let index = line.index.resolve(side_length).unwrap_or_else(|| {
            panic!("{line:?} does not exist on a cube with side length {side_length}")
        });
        Self {
            face: line.face,
            orientation: line.orientation,
            index,
        }
    }

    fn read(self, state: &CubeState, reverse: bool) -> Line {
        state.get_line(self.face, self.index, self.orientation, reverse)
    }

    fn write(self, state: &mut CubeState, contents: &[Color]) {
        state.set_line(self.face, self.index, self.orientation, contents);
    }
}

/// Applies a four-line cycle to the cube.
///
/// The first line is copied before anything is written. The remaining steps
/// are then applied in reverse order, so each step reads a line that has not
/// yet been overwritten, and finally the copy is written into the line that
/// the first step targets. Every line is read once and written once.
///
/// # Panics
///
/// Panics if a line in the cycle does not exist at the cube's side length.
/// Callers check this before calling.
pub(crate) fn cycle_lines(state: &mut CubeState, cycle: &TransferCycle) {
    let n = state.side_length();
    let steps = cycle.each_ref().map(|s| {
        let from = ResolvedLine::new(s.from, n);
        let to = ResolvedLine::new(s.to, n);
        (from, to, s.reverse)
    });

    let [(first_from, first_to, first_reverse), rest @ ..] = steps;
    let snapshot = first_from.read(state, first_reverse);
    for (from, to, reverse) in rest.into_iter().rev() {
        let line = from.read(state, reverse);
        to.write(state, &line);
    }
    first_to.write(state, &snapshot);
}
