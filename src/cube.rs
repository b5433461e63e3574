//! Corner cube state and the move engine.
//!
//! A [`CubeState`] is a plain `Copy` value holding the eight corner pieces,
//! indexed by piece identity. Applying a move returns a new state and leaves
//! the input untouched, so callers can branch from any earlier state without
//! undo bookkeeping.

use std::fmt;

use crate::error::{Error, Result};
use crate::geometry::rotate;
use crate::moves::Move;
use crate::pieces::{derive_twist, CornerPiece, Placement, Twist};
use crate::slots::{Slot, NUM_SLOTS};

/// Positions and orientations of all eight corner pieces.
///
/// Invariant: the occupied slots form a permutation of the eight slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CubeState {
    pieces: [CornerPiece; NUM_SLOTS],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Which piece occupies a slot, and how it is twisted there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupant {
    pub piece: usize,
    pub twist: Twist,
}

impl CubeState {
    /// The solved configuration: piece `i` at slot `i` with twist 0.
    pub const fn new() -> Self {
        let mut pieces = [CornerPiece::new(Slot::Ulb, Twist::Zero); NUM_SLOTS];
        let mut i = 0;
        while i < NUM_SLOTS {
            pieces[i] = CornerPiece::new(Slot::ALL[i], Twist::Zero);
            i += 1;
        }
        Self { pieces }
    }

    /// Builds the solved configuration with every piece carrying `twist`.
    pub fn uniform(twist: Twist) -> Self {
        let mut state = Self::new();
        for (index, piece) in state.pieces.iter_mut().enumerate() {
            *piece = CornerPiece::new(Slot::ALL[index], twist);
        }
        state
    }

    /// The solved configuration except that the piece whose home is `slot`
    /// carries `twist`.
    ///
    /// This is the starting point of a tracking drill.
    pub fn twisted_at(slot: Slot, twist: Twist) -> Self {
        let mut state = Self::new();
        state.pieces[slot.index()] = CornerPiece::new(slot, twist);
        state
    }

    /// Returns a copy with `piece` moved to `slot` and given `twist`.
    ///
    /// Whichever piece held `slot` before takes over the vacated slot, keeping
    /// its twist label, so the placement stays a permutation. The frames of
    /// both pieces are rebuilt from their labels.
    pub fn with_piece(&self, piece: usize, slot: Slot, twist: Twist) -> Result<Self> {
        if piece >= NUM_SLOTS {
            return Err(Error::PieceOutOfRange(piece));
        }

        let mut next = *self;
        let vacated = self.pieces[piece].slot;
        if let Some(displaced) = self.occupant_index(slot).filter(|&other| other != piece) {
            let displaced_twist = self.pieces[displaced].twist;
            next.pieces[displaced] = CornerPiece::new(vacated, displaced_twist);
        }
        next.pieces[piece] = CornerPiece::new(slot, twist);

        Ok(next)
    }

    /// Returns a copy with `piece` re-twisted in place.
    pub fn with_twist(&self, piece: usize, twist: Twist) -> Result<Self> {
        let slot = self.piece(piece)?.slot;
        self.with_piece(piece, slot, twist)
    }

    /// Returns the piece with the given identity.
    pub fn piece(&self, piece: usize) -> Result<&CornerPiece> {
        self.pieces.get(piece).ok_or(Error::PieceOutOfRange(piece))
    }

    /// All pieces, indexed by identity.
    pub fn pieces(&self) -> &[CornerPiece; NUM_SLOTS] {
        &self.pieces
    }

    /// Where `piece` currently is and how it is twisted.
    pub fn placement(&self, piece: usize) -> Result<Placement> {
        let corner = self.piece(piece)?;
        Ok(Placement {
            slot: corner.slot,
            twist: corner.twist,
        })
    }

    fn occupant_index(&self, slot: Slot) -> Option<usize> {
        self.pieces.iter().position(|piece| piece.slot == slot)
    }

    /// Resolves which piece currently occupies `slot`.
    ///
    /// Always `Some` for a state that upholds the permutation invariant.
    pub fn piece_at_slot(&self, slot: Slot) -> Option<Occupant> {
        self.occupant_index(slot).map(|piece| Occupant {
            piece,
            twist: self.pieces[piece].twist,
        })
    }

    /// Whether every slot holds exactly one piece.
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; NUM_SLOTS];
        for piece in &self.pieces {
            let index = piece.slot.index();
            if seen[index] {
                return false;
            }
            seen[index] = true;
        }
        true
    }

    /// Applies one face turn and returns the resulting state.
    ///
    /// Pieces outside the turning layer are copied unchanged. Pieces inside
    /// it have their slot coordinate and frame rotated together, then their
    /// twist re-derived against the new slot.
    ///
    /// # Panics
    ///
    /// Panics if a rotated coordinate is not a corner slot or a rotated up
    /// vector matches none of the new slot's axes. Both indicate a broken
    /// rotation or coordinate table, never bad input.
    pub fn apply_move(&self, mv: Move) -> Self {
        let axis = mv.face.axis();
        let quarter_turns = mv.quarter_turns();

        let mut next = *self;
        for (index, piece) in next.pieces.iter_mut().enumerate() {
            let coord = piece.slot.coord();
            if !mv.face.contains(coord) {
                continue;
            }

            let rotated = rotate(coord, axis, quarter_turns);
            let Some(slot) = Slot::from_coord(rotated) else {
                panic!("{mv} sent piece {index} from {} to non-corner {rotated:?}", piece.slot);
            };
            let frame = piece.frame.rotated(axis, quarter_turns);
            let Some(twist) = derive_twist(frame.up, slot) else {
                panic!(
                    "{mv} left piece {index} at {slot} with up vector {:?} matching no axis",
                    frame.up
                );
            };

            *piece = CornerPiece { slot, twist, frame };
        }

        next
    }

    /// Applies a sequence of moves in order.
    pub fn apply_moves<'a, I>(&self, moves: I) -> Self
    where
        I: IntoIterator<Item = &'a Move>,
    {
        moves
            .into_iter()
            .fold(*self, |state, &mv| state.apply_move(mv))
    }
}

/// One line per piece: `piece -> SLOT twist`.
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, piece) in self.pieces.iter().enumerate() {
            writeln!(f, "{index} -> {} {}", piece.slot, piece.twist)?;
        }
        Ok(())
    }
}

/// Applies `mv` to `state`.
pub fn apply_move(state: &CubeState, mv: Move) -> CubeState {
    state.apply_move(mv)
}

/// Resolves the occupant of `slot` in `state`.
pub fn piece_at_slot(state: &CubeState, slot: Slot) -> Option<Occupant> {
    state.piece_at_slot(slot)
}
