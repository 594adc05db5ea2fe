//! A loaded pursuit problem.

use pt_core::{CostGrid, Position, Tick, Trajectory};

/// Grid, agent start, and the target's full trajectory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub grid:        CostGrid,
    pub agent_start: Position,
    pub trajectory:  Trajectory,
}

impl Scenario {
    /// Number of ticks the target trajectory covers.
    #[inline]
    pub fn target_steps(&self) -> usize {
        self.trajectory.len()
    }

    /// The target's declared position at `tick`.
    #[inline]
    pub fn target_at(&self, tick: Tick) -> Option<Position> {
        self.trajectory.at(tick)
    }
}
