//! Corner slot definitions and the coordinate model.
//!
//! The eight corner slots sit at the signed unit coordinates of a cube
//! centered on the origin: +Y is up, +X is right and +Z is front. Slots are
//! numbered around the top layer first (starting back-left), then around the
//! bottom layer starting front-left.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::Coord;

/// Number of corner slots (and corner pieces).
pub const NUM_SLOTS: usize = 8;

/// One of the eight fixed corner positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Ulb = 0,
    Urb = 1,
    Urf = 2,
    Ulf = 3,
    Dlf = 4,
    Drf = 5,
    Drb = 6,
    Dlb = 7,
}

/// Coordinates of each slot, indexed by slot number.
const SLOT_COORDS: [Coord; NUM_SLOTS] = [
    (-1, 1, -1), // ULB
    (1, 1, -1),  // URB
    (1, 1, 1),   // URF
    (-1, 1, 1),  // ULF
    (-1, -1, 1), // DLF
    (1, -1, 1),  // DRF
    (1, -1, -1), // DRB
    (-1, -1, -1), // DLB
];

/// Three-letter mnemonics, indexed by slot number.
pub const SLOT_LABELS: [&str; NUM_SLOTS] = ["ULB", "URB", "URF", "ULF", "DLF", "DRF", "DRB", "DLB"];

/// The canonical (up, right, front) reference vectors of a slot.
///
/// Twist labels are measured against this triad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triad {
    pub up: Coord,
    pub right: Coord,
    pub front: Coord,
}

impl Slot {
    /// All slots in index order.
    pub const ALL: [Slot; NUM_SLOTS] = [
        Slot::Ulb,
        Slot::Urb,
        Slot::Urf,
        Slot::Ulf,
        Slot::Dlf,
        Slot::Drf,
        Slot::Drb,
        Slot::Dlb,
    ];

    /// The four slots of the top layer.
    pub const UPPER: [Slot; 4] = [Slot::Ulb, Slot::Urb, Slot::Urf, Slot::Ulf];

    /// Looks up a slot by its index.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::SlotOutOfRange(index))
    }

    /// Returns the slot index (0-7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the three-letter mnemonic, e.g. `"ULB"`.
    pub const fn label(self) -> &'static str {
        SLOT_LABELS[self as usize]
    }

    /// Returns the lattice coordinate of this slot.
    #[inline]
    pub const fn coord(self) -> Coord {
        SLOT_COORDS[self as usize]
    }

    /// Resolves a coordinate back to its slot.
    ///
    /// Returns `None` for anything that is not one of the eight corner
    /// coordinates.
    pub fn from_coord(coord: Coord) -> Option<Self> {
        match coord {
            (-1, 1, -1) => Some(Slot::Ulb),
            (1, 1, -1) => Some(Slot::Urb),
            (1, 1, 1) => Some(Slot::Urf),
            (-1, 1, 1) => Some(Slot::Ulf),
            (-1, -1, 1) => Some(Slot::Dlf),
            (1, -1, 1) => Some(Slot::Drf),
            (1, -1, -1) => Some(Slot::Drb),
            (-1, -1, -1) => Some(Slot::Dlb),
            _ => None,
        }
    }

    /// Whether this slot is in the top layer.
    #[inline]
    pub const fn is_upper(self) -> bool {
        self.coord().1 == 1
    }

    /// Derives the canonical axis triad from the slot coordinate.
    pub const fn triad(self) -> Triad {
        let (x, y, z) = self.coord();
        Triad {
            up: (0, y, 0),
            right: (x, 0, 0),
            front: (0, 0, z),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts a mnemonic in any case (`"urf"`, `"URF"`) or a bare index (`"2"`).
impl FromStr for Slot {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index);
        }
        Self::ALL
            .into_iter()
            .find(|slot| slot.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownSlot(text.to_string()))
    }
}

/// Coordinate of a slot.
pub fn coordinate_of(slot: Slot) -> Coord {
    slot.coord()
}

/// Slot at a coordinate, if any.
pub fn slot_of(coord: Coord) -> Option<Slot> {
    Slot::from_coord(coord)
}
