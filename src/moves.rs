//! Face-turn moves in standard cube notation.
//!
//! A move is a face letter with an optional modifier: none for a clockwise
//! quarter turn, `'` for counter-clockwise, `2` for a half turn. Text is
//! validated here; the engine only ever sees the closed [`Move`] type.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::{Axis, Coord};
use crate::slots::Slot;

/// One of the six cube faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    D,
    R,
    L,
    F,
    B,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::R, Face::L, Face::F, Face::B];

    /// The world axis this face turns about.
    pub const fn axis(self) -> Axis {
        match self {
            Face::U | Face::D => Axis::Y,
            Face::R | Face::L => Axis::X,
            Face::F | Face::B => Axis::Z,
        }
    }

    /// Sign of the layer coordinate along [`Face::axis`].
    pub const fn layer_sign(self) -> i32 {
        match self {
            Face::U | Face::R | Face::F => 1,
            Face::D | Face::L | Face::B => -1,
        }
    }

    /// Whether a coordinate belongs to this face's layer.
    #[inline]
    pub const fn contains(self, coord: Coord) -> bool {
        self.axis().component(coord) == self.layer_sign()
    }

    /// The four slots this face moves, in the order a plain turn cycles them.
    pub const fn slots(self) -> [Slot; 4] {
        match self {
            Face::U => [Slot::Ulb, Slot::Urb, Slot::Urf, Slot::Ulf],
            Face::D => [Slot::Dlf, Slot::Drf, Slot::Drb, Slot::Dlb],
            Face::R => [Slot::Urf, Slot::Urb, Slot::Drb, Slot::Drf],
            Face::L => [Slot::Ulb, Slot::Ulf, Slot::Dlf, Slot::Dlb],
            Face::F => [Slot::Ulf, Slot::Urf, Slot::Drf, Slot::Dlf],
            Face::B => [Slot::Urb, Slot::Ulb, Slot::Dlb, Slot::Drb],
        }
    }

    /// Whether turning this face moves whatever sits in `slot`.
    pub fn moves_slot(self, slot: Slot) -> bool {
        self.contains(slot.coord())
    }

    const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::R => 'R',
            Face::L => 'L',
            Face::F => 'F',
            Face::B => 'B',
        }
    }
}

/// How far and which way a face turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Half];

    const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Half => "2",
        }
    }
}

/// A single face turn such as `R`, `U'` or `F2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    /// All 18 moves, grouped by face.
    pub const ALL: [Move; 18] = {
        let mut moves = [Move::new(Face::U, Turn::Clockwise); 18];
        let mut i = 0;
        while i < 18 {
            moves[i] = Move::new(Face::ALL[i / 3], Turn::ALL[i % 3]);
            i += 1;
        }
        moves
    };

    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// Signed number of +90 degree steps about [`Face::axis`].
    ///
    /// A clockwise turn viewed from outside a face runs against the
    /// right-hand rule about the axis pointing out through that face, so a
    /// plain turn is `-layer_sign` and a primed turn is `+layer_sign`.
    pub const fn quarter_turns(self) -> i32 {
        match self.turn {
            Turn::Clockwise => -self.face.layer_sign(),
            Turn::CounterClockwise => self.face.layer_sign(),
            Turn::Half => 2,
        }
    }

    /// The move that undoes this one.
    pub const fn inverse(self) -> Self {
        let turn = match self.turn {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Half => Turn::Half,
        };
        Self::new(self.face, turn)
    }

    /// How many times the move must be repeated to return to the start.
    pub const fn order(self) -> usize {
        match self.turn {
            Turn::Half => 2,
            Turn::Clockwise | Turn::CounterClockwise => 4,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        let invalid = || Error::InvalidMove(token.to_string());
        let mut chars = token.chars();

        let face = match chars.next().ok_or_else(invalid)? {
            'U' => Face::U,
            'D' => Face::D,
            'R' => Face::R,
            'L' => Face::L,
            'F' => Face::F,
            'B' => Face::B,
            _ => return Err(invalid()),
        };
        let turn = match chars.next() {
            None => Turn::Clockwise,
            Some('\'') => Turn::CounterClockwise,
            Some('2') => Turn::Half,
            Some(_) => return Err(invalid()),
        };
        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(face, turn))
    }
}

/// Parses a whitespace-separated move sequence such as `"R U R' U'"`.
///
/// Fails on the first invalid token. An empty string yields an empty
/// sequence.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>> {
    text.split_whitespace().map(str::parse::<Move>).collect()
}

/// Formats a move sequence back into space-separated notation.
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
