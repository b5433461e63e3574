//! Corner Look-Ahead Trainer Library
//!
//! Simulates the eight corner pieces of a 3x3x3 twisty cube under face
//! turns, and builds look-ahead drills on top of that: given a starting
//! corner and a move sequence, where does the corner end up and how is it
//! twisted?

pub mod cube;
pub mod error;
pub mod explore;
pub mod geometry;
pub mod grid;
pub mod moves;
pub mod pieces;
pub mod puzzle;
pub mod slots;

pub use cube::{apply_move, piece_at_slot, CubeState, Occupant};
pub use error::{Error, Result};
pub use moves::{parse_sequence, Face, Move, Turn};
pub use pieces::{CornerPiece, Frame, Placement, Twist};
pub use slots::{coordinate_of, slot_of, Slot};
