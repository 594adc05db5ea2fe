//! Linear cell identifier.
//!
//! `CellIndex` is the 0-based, row-major index of a grid cell.  It is the
//! internal currency of the search: per-cell arrays are indexed by it and
//! parent links store it.  External callers speak in 1-based
//! [`Position`][crate::Position]s; [`CostGrid`][crate::CostGrid] converts
//! between the two.

use std::fmt;

/// Row-major index of a grid cell (`(y - 1) * width + (x - 1)`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellIndex(pub u32);

impl CellIndex {
    /// Sentinel meaning "no cell", used for unset parent links.
    pub const INVALID: CellIndex = CellIndex(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for CellIndex {
    /// Returns the `INVALID` sentinel so uninitialized links are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellIndex({})", self.0)
    }
}

impl From<CellIndex> for usize {
    #[inline(always)]
    fn from(id: CellIndex) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for CellIndex {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<CellIndex, Self::Error> {
        u32::try_from(n).map(CellIndex)
    }
}
