//! Interception search.
//!
//! # Ordering
//!
//! The frontier is ordered by **move count first, accumulated cost second**.
//! This is a breadth-expanding search with a cost tie-break, not a
//! minimum-cost search: a cell's `best_steps` is always its unweighted
//! 8-connected distance from the start, and cost only decides which of the
//! equally short paths is kept.
//!
//! # Rendezvous evaluation
//!
//! Every settled cell is tested against the target's future occupancy.  If
//! the target stands on the cell at offset `k` and the agent can be there by
//! then (`best_steps <= k`), the agent arrives and waits:
//!
//! ```text
//! score = best_cost + (k - best_steps) * cost(cell)
//! ```
//!
//! The minimum score wins; equal scores prefer the smaller `k`.
//!
//! # Pruning
//!
//! Once an interception is known, frontier entries whose accumulated cost is
//! already `>= best score` are dropped.  Because the frontier is not ordered
//! by cost, this can discard a shorter-but-costlier prefix that would have led
//! to a cheaper rendezvous.  The rule is kept as-is; changing it changes the
//! planner's output.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::trace;

use pt_core::{CellIndex, CostGrid, Position, Tick, Trajectory};

/// `best_steps` value of a cell the search never reached.
pub const UNREACHED_STEPS: u32 = u32::MAX;

/// `best_cost` value of a cell the search never reached.
pub const UNREACHED_COST: i64 = i64::MAX;

// ── Interception ──────────────────────────────────────────────────────────────

/// The chosen rendezvous: where, when, and at what total cost.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interception {
    pub cell:   CellIndex,
    /// Ticks from now until the target stands on `cell`.
    pub offset: u32,
    /// Movement cost plus waiting cost.
    pub score:  i64,
}

// ── SearchTree ────────────────────────────────────────────────────────────────

/// Per-cell search state for one invocation: the lexicographically best
/// `(steps, cost)` found for every cell plus the parent link that achieved it.
///
/// Allocated fresh for every search and dropped afterwards.
#[derive(Clone, Debug)]
pub struct SearchTree {
    start:      CellIndex,
    best_steps: Vec<u32>,
    best_cost:  Vec<i64>,
    parent:     Vec<CellIndex>,
}

impl SearchTree {
    fn new(cell_count: usize, start: CellIndex) -> Self {
        let mut tree = Self {
            start,
            best_steps: vec![UNREACHED_STEPS; cell_count],
            best_cost:  vec![UNREACHED_COST; cell_count],
            parent:     vec![CellIndex::INVALID; cell_count],
        };
        tree.best_steps[start.index()] = 0;
        tree.best_cost[start.index()] = 0;
        tree
    }

    #[inline]
    pub fn start(&self) -> CellIndex {
        self.start
    }

    /// Minimum move count to reach `cell`, or `None` if unreached.
    #[inline]
    pub fn steps(&self, cell: CellIndex) -> Option<u32> {
        let s = self.best_steps[cell.index()];
        (s != UNREACHED_STEPS).then_some(s)
    }

    /// Minimum entered-cell cost among the fewest-move paths to `cell`.
    #[inline]
    pub fn cost(&self, cell: CellIndex) -> Option<i64> {
        let c = self.best_cost[cell.index()];
        (c != UNREACHED_COST).then_some(c)
    }

    #[inline]
    pub fn parent(&self, cell: CellIndex) -> Option<CellIndex> {
        let p = self.parent[cell.index()];
        p.is_valid().then_some(p)
    }

    /// Forward path from the start to `cell`, excluding the start itself.
    ///
    /// Returns `None` if the parent chain does not lead back to the start.
    /// The walk is bounded by the cell count so a corrupt chain cannot loop.
    pub fn path_to(&self, grid: &CostGrid, cell: CellIndex) -> Option<Vec<Position>> {
        let mut rev = Vec::new();
        let mut cur = cell;
        while cur != self.start {
            if rev.len() >= self.parent.len() {
                return None;
            }
            rev.push(grid.position_of(cur));
            cur = self.parent(cur)?;
        }
        rev.reverse();
        Some(rev)
    }
}

// ── SearchOutcome ─────────────────────────────────────────────────────────────

/// Everything one search produces.  The tree is kept so fallbacks and path
/// reconstruction can read it.
#[derive(Debug)]
pub struct SearchOutcome {
    pub tree:         SearchTree,
    pub interception: Option<Interception>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Earliest offset `k <= remaining` at which the target occupies each cell,
/// counting only in-bounds, traversable cells.  Later visits to a cell are
/// ignored.
pub fn interception_offsets(
    grid:       &CostGrid,
    trajectory: &Trajectory,
    now:        Tick,
    remaining:  u32,
) -> FxHashMap<CellIndex, u32> {
    let mut offsets = FxHashMap::default();
    for (t, pos) in trajectory.iter_from(now) {
        let k = t - now;
        if k > remaining as u64 {
            break;
        }
        if let Some(cell) = grid.traversable_index(pos) {
            offsets.entry(cell).or_insert(k as u32);
        }
    }
    offsets
}

/// Search from `start` for the cheapest interception within `remaining`
/// moves.
///
/// `start` must be a traversable cell of `grid`.
pub fn search(
    grid:       &CostGrid,
    start:      CellIndex,
    trajectory: &Trajectory,
    now:        Tick,
    remaining:  u32,
) -> SearchOutcome {
    let offsets = interception_offsets(grid, trajectory, now, remaining);
    let mut tree = SearchTree::new(grid.cell_count(), start);
    let mut best: Option<Interception> = None;

    // Min-heap on (steps, cost).  Reverse makes BinaryHeap (max) behave as
    // min-heap; CellIndex as the last key makes tie-breaking deterministic.
    let mut heap: BinaryHeap<Reverse<(u32, i64, CellIndex)>> = BinaryHeap::new();
    heap.push(Reverse((0, 0, start)));

    while let Some(Reverse((steps, cost, cell))) = heap.pop() {
        // Superseded by a better entry for the same cell.
        if steps != tree.best_steps[cell.index()] || cost != tree.best_cost[cell.index()] {
            continue;
        }
        if steps > remaining {
            continue;
        }
        if best.is_some_and(|b| cost >= b.score) {
            continue;
        }

        if let Some(&k) = offsets.get(&cell) {
            if steps <= k {
                let wait = (k - steps) as i64;
                let score = cost + wait * grid.cost(cell) as i64;
                let better = best.is_none_or(|b| score < b.score || (score == b.score && k < b.offset));
                if better {
                    trace!(%cell, steps, k, score, "new best interception");
                    best = Some(Interception { cell, offset: k, score });
                }
            }
        }

        let next_steps = steps + 1;
        if next_steps > remaining {
            continue;
        }
        for next in grid.neighbours(cell) {
            let next_cost = cost + grid.cost(next) as i64;
            let i = next.index();
            if next_steps < tree.best_steps[i]
                || (next_steps == tree.best_steps[i] && next_cost < tree.best_cost[i])
            {
                tree.best_steps[i] = next_steps;
                tree.best_cost[i] = next_cost;
                tree.parent[i] = cell;
                heap.push(Reverse((next_steps, next_cost, next)));
            }
        }
    }

    SearchOutcome { tree, interception: best }
}
