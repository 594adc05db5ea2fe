//! Grid coordinates and the 8-connected move model.
//!
//! Coordinates are **1-based** to match the map description format: the
//! top-left cell is `(1, 1)` and the bottom-right is `(width, height)`.

use std::fmt;

/// The 8 directional single-cell steps, in the canonical scan order.
pub const STEPS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The 9 legal actions: the 8 [`STEPS`] followed by staying in place.
pub const MOVES: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 0),
];

/// A 1-based grid coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position shifted by `(dx, dy)`.  No bounds check.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// All 9 candidate actions from `self`, in [`MOVES`] order.
    pub fn candidates(self) -> impl Iterator<Item = Position> {
        MOVES.iter().map(move |&(dx, dy)| self.offset(dx, dy))
    }

    /// `true` if `other` is reachable in one 8-connected step or by staying.
    #[inline]
    pub fn is_within_one_step(self, other: Position) -> bool {
        (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }

    /// Squared Euclidean distance, widened to avoid overflow on large maps.
    #[inline]
    pub fn dist_sq(self, other: Position) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
