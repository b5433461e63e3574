//! Discrete 3D rotation utilities.
//!
//! Every vector handled by the engine has components in {-1, 0, +1}, so a
//! quarter turn about a world axis is just a swap and a negation. No
//! floating point is involved anywhere.

/// A signed lattice vector `(x, y, z)`.
pub type Coord = (i32, i32, i32);

/// One of the three world axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the component of `coord` along this axis.
    #[inline]
    pub const fn component(self, coord: Coord) -> i32 {
        match self {
            Axis::X => coord.0,
            Axis::Y => coord.1,
            Axis::Z => coord.2,
        }
    }
}

/// Rotates `coord` by +90 degrees about `axis` (right-hand rule).
#[inline]
pub const fn quarter_turn(coord: Coord, axis: Axis) -> Coord {
    let (x, y, z) = coord;
    match axis {
        // (y, z) -> (-z, y)
        Axis::X => (x, -z, y),
        // (x, z) -> (z, -x)
        Axis::Y => (z, y, -x),
        // (x, y) -> (-y, x)
        Axis::Z => (-y, x, z),
    }
}

/// Rotates `coord` about `axis` by `quarter_turns` steps of +90 degrees.
///
/// Negative counts turn the other way; the count is reduced mod 4 first, so
/// `-1` is applied as three positive quarter turns.
pub fn rotate(coord: Coord, axis: Axis, quarter_turns: i32) -> Coord {
    (0..quarter_turns.rem_euclid(4)).fold(coord, |acc, _| quarter_turn(acc, axis))
}
