//! Corner piece state and the twist encoding.
//!
//! A piece records the slot it occupies, its twist label, and an axis frame:
//! where its own up/right/front directions point in world space. The frame
//! is redundant with `(slot, twist)`; it exists so that a move can rotate
//! plain vectors and then classify the result instead of composing twists
//! through a lookup table.

use std::fmt;

use crate::error::{Error, Result};
use crate::geometry::{rotate, Axis, Coord};
use crate::slots::Slot;

/// Discrete orientation label of a corner, relative to its slot's triad.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Twist {
    /// The piece's up axis matches the slot's canonical up axis.
    #[default]
    Zero = 0,
    /// The piece's up axis lies along the slot's front axis.
    One = 1,
    /// The piece's up axis lies along the slot's right axis.
    Two = 2,
}

impl Twist {
    pub const ALL: [Twist; 3] = [Twist::Zero, Twist::One, Twist::Two];

    /// Returns the numeric label (0, 1 or 2).
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Twist {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Twist::Zero),
            1 => Ok(Twist::One),
            2 => Ok(Twist::Two),
            other => Err(Error::TwistOutOfRange(other)),
        }
    }
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A piece's local (up, right, front) directions in world space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    pub up: Coord,
    pub right: Coord,
    pub front: Coord,
}

impl Frame {
    /// Builds the frame of a piece sitting in `slot` with the given twist.
    ///
    /// Twist 1 cycles the canonical triad so that up takes the place of
    /// front, right of up, and front of right; twist 2 is the inverse cycle.
    pub const fn canonical(slot: Slot, twist: Twist) -> Self {
        let triad = slot.triad();
        let (up, right, front) = match twist {
            Twist::Zero => (triad.up, triad.right, triad.front),
            Twist::One => (triad.front, triad.up, triad.right),
            Twist::Two => (triad.right, triad.front, triad.up),
        };
        Self { up, right, front }
    }

    /// Rotates all three axes together.
    pub fn rotated(self, axis: Axis, quarter_turns: i32) -> Self {
        Self {
            up: rotate(self.up, axis, quarter_turns),
            right: rotate(self.right, axis, quarter_turns),
            front: rotate(self.front, axis, quarter_turns),
        }
    }
}

/// Recovers the twist of a piece from its up vector and the slot it sits in.
///
/// Returns `None` when the up vector is neither the slot's up axis nor lies
/// along its front or right axis. That cannot happen for a frame produced by
/// whole-cube rotations of a canonical frame, so callers treat `None` as a
/// broken invariant.
pub fn derive_twist(up: Coord, slot: Slot) -> Option<Twist> {
    let triad = slot.triad();
    let (x, y, z) = up;

    if up == triad.up {
        Some(Twist::Zero)
    } else if y == 0 && x == 0 && z.abs() == 1 {
        Some(Twist::One)
    } else if y == 0 && z == 0 && x.abs() == 1 {
        Some(Twist::Two)
    } else {
        None
    }
}

/// One of the eight physical corner pieces.
///
/// The piece's identity is its index inside [`crate::cube::CubeState`], not
/// anything stored here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CornerPiece {
    pub slot: Slot,
    pub twist: Twist,
    pub frame: Frame,
}

impl CornerPiece {
    /// A piece in `slot` with the given twist and its canonical frame.
    pub const fn new(slot: Slot, twist: Twist) -> Self {
        Self {
            slot,
            twist,
            frame: Frame::canonical(slot, twist),
        }
    }
}

/// Answer pair the trainer asks for: where a piece is, and how it is twisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub slot: Slot,
    pub twist: Twist,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.slot, self.twist)
    }
}

impl std::str::FromStr for Placement {
    type Err = Error;

    /// Parses `SLOT:TWIST`, e.g. `URF:1` or `2:1`.
    fn from_str(text: &str) -> Result<Self> {
        let (slot, twist) = text
            .split_once(':')
            .ok_or_else(|| Error::MalformedAnswer(text.to_string()))?;
        let twist: u8 = twist
            .trim()
            .parse()
            .map_err(|_| Error::MalformedAnswer(text.to_string()))?;
        Ok(Self {
            slot: slot.parse()?,
            twist: Twist::try_from(twist)?,
        })
    }
}
