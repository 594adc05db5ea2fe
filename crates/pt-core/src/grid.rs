//! The weighted cost grid.
//!
//! # Layout
//!
//! Costs are stored row-major by `y`:
//!
//! ```text
//! index(x, y) = (y - 1) * width + (x - 1)      (x, y are 1-based)
//! ```
//!
//! A cell is **traversable** iff its cost lies in `[0, collision_threshold)`.
//! Entering a cell (or waiting in it for one tick) costs its value.
//!
//! The grid is immutable once built; the planner and the stepping loop only
//! ever borrow it.

use crate::{CellIndex, CoreError, CoreResult, Position};

/// A `width × height` grid of integer cell costs with an obstacle threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostGrid {
    width:               i32,
    height:              i32,
    collision_threshold: i32,
    costs:               Vec<i32>,
}

impl CostGrid {
    /// Build a grid from row-major (`y`-major) costs.
    ///
    /// # Errors
    ///
    /// Fails if either dimension is not positive, the grid has more cells
    /// than a [`CellIndex`] can address, or `costs.len()` differs from
    /// `width * height`.
    pub fn new(
        width:               i32,
        height:              i32,
        collision_threshold: i32,
        costs:               Vec<i32>,
    ) -> CoreResult<Self> {
        let expected = Self::cell_count_for(width, height)?;
        if costs.len() != expected {
            return Err(CoreError::CostCountMismatch {
                width,
                height,
                expected,
                got: costs.len(),
            });
        }
        Ok(Self { width, height, collision_threshold, costs })
    }

    /// A grid where every cell has the same cost.
    pub fn uniform(width: i32, height: i32, collision_threshold: i32, cost: i32) -> CoreResult<Self> {
        let cells = Self::cell_count_for(width, height)?;
        Self::new(width, height, collision_threshold, vec![cost; cells])
    }

    /// Number of cells a `width × height` grid would hold.
    ///
    /// Validates the dimensions without allocating: both must be positive
    /// and every cell must have a valid [`CellIndex`].
    pub fn cell_count_for(width: i32, height: i32) -> CoreResult<usize> {
        if width <= 0 || height <= 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let cells = width as usize * height as usize;
        // The last index must stay below the `INVALID` sentinel.
        if CellIndex::try_from(cells).is_err() {
            return Err(CoreError::TooManyCells { width, height });
        }
        Ok(cells)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn collision_threshold(&self) -> i32 {
        self.collision_threshold
    }

    /// Total number of cells (`width * height`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.costs.len()
    }

    // ── Coordinate mapping ────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 1 && pos.x <= self.width && pos.y >= 1 && pos.y <= self.height
    }

    /// Linear index of `pos`, or `None` when it lies outside the grid.
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<CellIndex> {
        if !self.in_bounds(pos) {
            return None;
        }
        let i = (pos.y - 1) as u32 * self.width as u32 + (pos.x - 1) as u32;
        Some(CellIndex(i))
    }

    /// Inverse of [`index_of`][Self::index_of].
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `cell` is not a cell of this grid.
    #[inline]
    pub fn position_of(&self, cell: CellIndex) -> Position {
        debug_assert!(cell.index() < self.costs.len(), "{cell} outside grid");
        let w = self.width as u32;
        Position::new((cell.0 % w) as i32 + 1, (cell.0 / w) as i32 + 1)
    }

    // ── Costs and traversability ──────────────────────────────────────────

    /// Cost of an in-grid cell.
    #[inline]
    pub fn cost(&self, cell: CellIndex) -> i32 {
        self.costs[cell.index()]
    }

    /// Cost at `pos`, or `None` when out of bounds.
    #[inline]
    pub fn cost_at(&self, pos: Position) -> Option<i32> {
        self.index_of(pos).map(|c| self.cost(c))
    }

    #[inline]
    pub fn is_traversable_cell(&self, cell: CellIndex) -> bool {
        let c = self.cost(cell);
        c >= 0 && c < self.collision_threshold
    }

    /// In bounds and below the collision threshold.
    #[inline]
    pub fn is_traversable(&self, pos: Position) -> bool {
        self.index_of(pos).is_some_and(|c| self.is_traversable_cell(c))
    }

    /// Index of `pos` if it is traversable, else `None`.
    #[inline]
    pub fn traversable_index(&self, pos: Position) -> Option<CellIndex> {
        self.index_of(pos).filter(|&c| self.is_traversable_cell(c))
    }

    /// Traversable 8-connected neighbours of `cell` in [`STEPS`][crate::STEPS]
    /// order.  Staying in place is not included.
    pub fn neighbours(&self, cell: CellIndex) -> impl Iterator<Item = CellIndex> + '_ {
        let here = self.position_of(cell);
        crate::STEPS
            .iter()
            .filter_map(move |&(dx, dy)| self.traversable_index(here.offset(dx, dy)))
    }
}
