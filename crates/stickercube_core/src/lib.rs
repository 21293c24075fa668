//! Sticker-grid model of an NxNxN cube and the turn engine that mutates it.
//!
//! The cube is stored as six square grids of stickers, one per [`Face`]. A
//! face turn rotates that face's own grid and cycles the four boundary lines
//! of the adjacent faces. A slice turn cycles the four middle lines of the
//! faces around an internal layer and rotates no grid at all.
//!
//! Every line transfer is described by static data in [`transfer`] and
//! [`slice`], so the cycling algorithm itself has no per-face branching.
//!
//! # Example
//!
//! ```rust
//! use stickercube_core::*;
//!
//! let mut state = CubeState::default();
//! let r = Turn::new(Layer::Face(Face::Right), Direction::Clockwise);
//! apply_turn(&mut state, r.with_repeat(4)?)?;
//! assert!(state.is_solved());
//! # Ok::<(), CubeError>(())
//! ```

mod color;
mod errors;
mod face;
mod grid;
mod line;
mod rotate;
pub mod slice;
mod state;
pub mod transfer;
mod turn;

pub use color::Color;
pub use errors::CubeError;
pub use face::{Face, PerFace};
pub use grid::Grid;
pub use line::{Line, LineIndex, LineRef, Orientation};
pub use rotate::rotate_face;
pub use slice::{Slice, turn_slice};
pub use state::CubeState;
pub use transfer::{TransferCycle, TransferStep, transfer_edges};
pub use turn::{Direction, Layer, MAX_REPEAT, Turn, apply_turn, apply_turns};

/// Side length of a standard cube.
pub const DEFAULT_SIDE_LENGTH: usize = 3;

#[cfg(test)]
mod tests;
