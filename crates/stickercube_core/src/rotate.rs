//! Rotation of a single face's own sticker grid.

use crate::{CubeState, Direction, Face};

/// Rotates the sticker grid of one face by 90 degrees, as seen from outside
/// the cube. No other face is touched.
pub fn rotate_face(state: &mut CubeState, face: Face, direction: Direction) {
    let grid = state.face_mut(face);
    grid.transpose();
    match direction {
        Direction::Clockwise => grid.reverse_rows(),
        Direction::CounterClockwise => grid.reverse_columns(),
    }
}
