//! Run configuration and move-time accounting.

use std::time::Duration;

/// How many ticks a move consumes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// Whole seconds spent planning, at least 1.  Slow planning lets the
    /// target get ahead.
    #[default]
    WallClock,
    /// Exactly one tick per move, independent of planning time.
    Unit,
}

impl Timing {
    /// Ticks charged for a move whose planning took `elapsed`.
    #[inline]
    pub fn ticks_for(self, elapsed: Duration) -> u64 {
        match self {
            Timing::WallClock => elapsed.as_secs().max(1),
            Timing::Unit => 1,
        }
    }
}

/// Top-level run configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    pub timing: Timing,

    /// Stop after this many planner calls.  `None` runs to capture or horizon.
    pub max_calls: Option<u64>,
}

impl RunConfig {
    /// Deterministic configuration: one tick per move, no call cap.
    pub fn unit() -> Self {
        Self { timing: Timing::Unit, max_calls: None }
    }
}
