//! Error types for parsing and setting up cube states.
//!
//! Only boundary input is recoverable. A rotated coordinate that misses every
//! corner slot, or an up vector that matches no canonical axis, means the
//! engine itself is broken, so those paths panic instead of returning here.

use thiserror::Error;

/// Result type for cornerdrill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning user input into engine values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The token does not match `^(U|D|R|L|F|B)('|2)?$`.
    #[error("invalid move token: {0:?}")]
    InvalidMove(String),

    /// A move sequence was required but none was given.
    #[error("empty move sequence")]
    EmptySequence,

    /// Piece identifiers run from 0 to 7.
    #[error("piece index {0} out of range (expected 0-7)")]
    PieceOutOfRange(usize),

    /// Slot indices run from 0 to 7.
    #[error("slot index {0} out of range (expected 0-7)")]
    SlotOutOfRange(usize),

    /// Twist labels are 0, 1 or 2.
    #[error("twist {0} out of range (expected 0-2)")]
    TwistOutOfRange(u8),

    /// Text that is neither a slot label nor a slot index.
    #[error("unknown slot {0:?}")]
    UnknownSlot(String),

    /// An answer not written as `SLOT:TWIST`.
    #[error("malformed answer {0:?} (expected SLOT:TWIST)")]
    MalformedAnswer(String),
}
