//! The target's known future path.

use crate::{CoreError, CoreResult, Position, Tick};

/// Target positions indexed by absolute tick `0 ..= horizon`.
///
/// The trajectory covers the whole run: its length (`target_steps`) fixes
/// the simulation horizon, and no move is planned past
/// [`horizon`][Self::horizon].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    points: Vec<Position>,
}

impl Trajectory {
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyTrajectory`] if `points` is empty.
    pub fn new(points: Vec<Position>) -> CoreResult<Self> {
        if points.is_empty() {
            return Err(CoreError::EmptyTrajectory);
        }
        Ok(Self { points })
    }

    /// A target that never moves, for `steps` ticks.
    pub fn stationary(at: Position, steps: usize) -> CoreResult<Self> {
        Self::new(vec![at; steps])
    }

    /// Number of ticks covered (`target_steps`).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last valid tick.
    #[inline]
    pub fn horizon(&self) -> Tick {
        Tick(self.points.len() as u64 - 1)
    }

    /// Target position at `tick`, or `None` past the horizon.
    #[inline]
    pub fn at(&self, tick: Tick) -> Option<Position> {
        self.points.get(tick.index()).copied()
    }

    /// Moves left before the horizon: `horizon - now`, floored at zero.
    #[inline]
    pub fn remaining_moves(&self, now: Tick) -> u64 {
        self.horizon().saturating_since(now)
    }

    /// `(tick, position)` pairs from `from` up to and including the horizon.
    pub fn iter_from(&self, from: Tick) -> impl Iterator<Item = (Tick, Position)> + '_ {
        self.points
            .iter()
            .enumerate()
            .skip(from.index())
            .map(|(t, &p)| (Tick(t as u64), p))
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.points
    }
}
