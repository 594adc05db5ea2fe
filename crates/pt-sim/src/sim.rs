//! The `Pursuit` runner and its stepping loop.

use std::time::Instant;

use tracing::{debug, info};

use pt_core::{Position, Tick};
use pt_planner::{PlanRequest, PursuitPolicy};
use pt_scenario::Scenario;

use crate::audit::audit_move;
use crate::{PursuitObserver, RunConfig, SimResult};

// ── Results ───────────────────────────────────────────────────────────────────

/// Why a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// Agent stood on the target's cell after a move.
    Caught,
    /// The next move would have ended at or past the last trajectory tick.
    Horizon,
    /// `RunConfig::max_calls` reached.
    CallLimit,
}

/// Totals reported at the end of a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub stop:          StopReason,
    /// Clock value when the run stopped.
    pub elapsed:       Tick,
    /// Moves that changed cell; staying put is not counted.
    pub moves:         u64,
    /// Sum over moves of `move_ticks × cost(cell moved out of)`.
    pub path_cost:     i64,
    pub planner_calls: u64,
    pub final_agent:   Position,
}

impl RunSummary {
    #[inline]
    pub fn caught(&self) -> bool {
        self.stop == StopReason::Caught
    }
}

// ── Pursuit ───────────────────────────────────────────────────────────────────

/// One agent chasing one target through a [`Scenario`].
///
/// Each tick:
///
/// 1. Ask the policy for a move given the target's position at `now`.
/// 2. Audit the move; an illegal move aborts the run.
/// 3. Charge `move_ticks` from [`Timing`][crate::Timing].  If the clock would
///    reach the trajectory length, stop without applying the move.
/// 4. Apply the move, accrue cost, and check for capture at the new tick.
///
/// Create via [`PursuitBuilder`][crate::PursuitBuilder].
pub struct Pursuit<P: PursuitPolicy> {
    pub config:   RunConfig,
    pub scenario: Scenario,
    pub policy:   P,

    pub(crate) agent:     Position,
    pub(crate) now:       Tick,
    pub(crate) moves:     u64,
    pub(crate) path_cost: i64,
    pub(crate) calls:     u64,
    pub(crate) stopped:   Option<StopReason>,
}

impl<P: PursuitPolicy> Pursuit<P> {
    // ── Public API ────────────────────────────────────────────────────────

    #[inline]
    pub fn agent(&self) -> Position {
        self.agent
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Step until capture, horizon, or call limit.
    ///
    /// Calls observer hooks along the way.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: PursuitObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        info!(
            agent = %self.agent, steps = self.scenario.target_steps(),
            width = self.scenario.grid.width(), height = self.scenario.grid.height(),
            "pursuit started"
        );
        observer.on_start(self.now, self.agent);

        let stop = loop {
            if let Some(reason) = self.step(observer)? {
                break reason;
            }
        };

        let summary = self.summary(stop);
        info!(
            caught = summary.caught(), elapsed = %summary.elapsed, moves = summary.moves,
            path_cost = summary.path_cost, "pursuit finished"
        );
        observer.on_finish(&summary);
        Ok(summary)
    }

    /// Advance by one planner call.
    ///
    /// Returns `Some(reason)` once the run has stopped; further calls keep
    /// returning the same reason without planning.
    pub fn step<O: PursuitObserver>(&mut self, observer: &mut O) -> SimResult<Option<StopReason>> {
        if self.stopped.is_some() {
            return Ok(self.stopped);
        }
        if self.config.max_calls.is_some_and(|max| self.calls >= max) {
            return Ok(self.stop(StopReason::CallLimit));
        }
        let Some(target) = self.scenario.target_at(self.now) else {
            return Ok(self.stop(StopReason::Horizon));
        };

        let request = PlanRequest {
            grid:       &self.scenario.grid,
            trajectory: &self.scenario.trajectory,
            agent:      self.agent,
            target,
            now:        self.now,
        };
        let started = Instant::now();
        let mv = self.policy.next_move(&request);
        let move_ticks = self.config.timing.ticks_for(started.elapsed());
        self.calls += 1;

        audit_move(&self.scenario.grid, self.now, self.agent, mv.position)?;

        if self.now.0 + move_ticks >= self.scenario.target_steps() as u64 {
            return Ok(self.stop(StopReason::Horizon));
        }

        let left = self.agent;
        self.now = self.now + move_ticks;
        if mv.position != left {
            self.moves += 1;
        }
        // `left` is in bounds: an out-of-map start fails the first audit.
        let left_cost = self.scenario.grid.cost_at(left).unwrap_or(0) as i64;
        self.path_cost += move_ticks as i64 * left_cost;
        self.agent = mv.position;

        debug!(tick = %self.now, agent = %self.agent, decision = ?mv.decision, "moved");
        observer.on_move(self.now, self.agent, &mv);

        if self.scenario.target_at(self.now) == Some(self.agent) {
            return Ok(self.stop(StopReason::Caught));
        }
        Ok(None)
    }

    fn stop(&mut self, reason: StopReason) -> Option<StopReason> {
        self.stopped = Some(reason);
        self.stopped
    }

    fn summary(&self, stop: StopReason) -> RunSummary {
        RunSummary {
            stop,
            elapsed:       self.now,
            moves:         self.moves,
            path_cost:     self.path_cost,
            planner_calls: self.calls,
            final_agent:   self.agent,
        }
    }
}
