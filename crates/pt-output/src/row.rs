//! Plain data row written by trajectory writers.

use pt_core::{Position, Tick};

/// The agent's cell at one clock value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrajectoryRow {
    pub tick: u64,
    pub x:    i32,
    pub y:    i32,
}

impl TrajectoryRow {
    #[inline]
    pub fn new(tick: Tick, at: Position) -> Self {
        Self { tick: tick.0, x: at.x, y: at.y }
    }
}
