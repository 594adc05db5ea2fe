//! The per-call entry point: `PursuitPolicy` and the default
//! `InterceptPlanner`.
//!
//! # Per-call control flow
//!
//! ```text
//! agent == target              → hold, clear plan        (GoalReached)
//! agent cell not traversable   → hold, clear plan        (InvalidStart)
//! cached plan still valid      → next cached move        (Replayed)
//! no moves left before horizon → hold, clear plan        (HorizonExhausted)
//! search finds interception    → new plan                (Intercept)
//! target's cell was reached    → new plan, no waiting    (ChaseTarget)
//! otherwise                    → greedy step, no plan    (GreedyStep)
//! ```
//!
//! Apart from the degenerate holds, the returned position is always one of
//! the 9 legal candidates from the agent's cell, in bounds and traversable.

use tracing::{debug, warn};

use pt_core::{CellIndex, CostGrid, Position, Tick, Trajectory};

use crate::fallback::{chase_target, greedy_step};
use crate::plan::PlanCache;
use crate::search::search;

// ── Request / response ────────────────────────────────────────────────────────

/// Read-only inputs for one planning call.
///
/// `target` is the target's declared position at `now` and is expected to
/// equal `trajectory.at(now)`.
#[derive(Copy, Clone, Debug)]
pub struct PlanRequest<'a> {
    pub grid:       &'a CostGrid,
    pub trajectory: &'a Trajectory,
    pub agent:      Position,
    pub target:     Position,
    pub now:        Tick,
}

/// Why a particular move was chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// Agent already shares the target's cell.
    GoalReached,
    /// Agent's own cell is out of bounds or an obstacle.
    InvalidStart,
    /// No moves remain before the horizon.
    HorizonExhausted,
    /// Next entry of the cached plan.
    Replayed,
    /// Fresh plan toward a rendezvous `offset` ticks ahead.
    Intercept { offset: u32, score: i64 },
    /// No rendezvous; fresh plan toward the target's current cell.
    ChaseTarget { steps: u32 },
    /// Neither of the above; single greedy step, nothing cached.
    GreedyStep,
    /// Parent chain did not lead back to the start; holding position.
    ReconstructionFailed,
}

/// One planning result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub position: Position,
    pub decision: Decision,
}

impl Move {
    #[inline]
    fn hold(at: Position, decision: Decision) -> Self {
        Self { position: at, decision }
    }
}

// ── PursuitPolicy ─────────────────────────────────────────────────────────────

/// Pluggable pursuit strategy driven once per tick by the stepping loop.
///
/// Implementations own whatever session state they need; `&mut self` makes
/// each instance single-caller by construction.
pub trait PursuitPolicy {
    fn next_move(&mut self, request: &PlanRequest<'_>) -> Move;
}

// ── InterceptPlanner ──────────────────────────────────────────────────────────

/// Counters for how calls were resolved.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerStats {
    pub calls:     u64,
    pub replays:   u64,
    pub searches:  u64,
    pub fallbacks: u64,
}

/// Interception planner with a cross-call plan cache.
///
/// One instance per pursuing agent.  Instances share nothing, so independent
/// agents (or parallel test runs) never observe each other's plans.
#[derive(Clone, Debug, Default)]
pub struct InterceptPlanner {
    plan:  PlanCache,
    stats: PlannerStats,
}

impl InterceptPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently cached plan.
    pub fn plan(&self) -> &PlanCache {
        &self.plan
    }

    pub fn stats(&self) -> PlannerStats {
        self.stats
    }

    /// Drop any cached plan, forcing a full search on the next call.
    pub fn reset(&mut self) {
        self.plan.clear();
    }

    fn plan_fresh(&mut self, req: &PlanRequest<'_>, start: CellIndex, remaining: u32) -> Move {
        let grid = req.grid;
        self.stats.searches += 1;
        let outcome = search(grid, start, req.trajectory, req.now, remaining);

        let chosen = match outcome.interception {
            Some(i) => Some((i.cell, i.offset, Decision::Intercept { offset: i.offset, score: i.score })),
            None => chase_target(grid, &outcome.tree, req.target)
                .map(|(cell, steps)| (cell, steps, Decision::ChaseTarget { steps })),
        };

        let Some((goal, offset, decision)) = chosen else {
            self.stats.fallbacks += 1;
            self.plan.clear();
            let step = greedy_step(grid, req.agent, req.target);
            debug!(tick = %req.now, from = %req.agent, to = %step, "no interception, greedy step");
            return Move { position: step, decision: Decision::GreedyStep };
        };
        if matches!(decision, Decision::ChaseTarget { .. }) {
            self.stats.fallbacks += 1;
        }

        let Some(mut steps) = outcome.tree.path_to(grid, goal) else {
            warn!(tick = %req.now, goal = %grid.position_of(goal), "parent chain does not reach start");
            self.plan.clear();
            return Move::hold(req.agent, Decision::ReconstructionFailed);
        };

        let goal_pos = grid.position_of(goal);
        let wait = (offset as usize).saturating_sub(steps.len());
        steps.extend(std::iter::repeat_n(goal_pos, wait));
        debug!(
            tick = %req.now, goal = %goal_pos, moves = steps.len() - wait, wait, ?decision,
            "planned"
        );

        match self.plan.install(steps, req.now) {
            Some(p) => Move { position: p, decision },
            None => Move::hold(req.agent, decision),
        }
    }
}

impl PursuitPolicy for InterceptPlanner {
    fn next_move(&mut self, req: &PlanRequest<'_>) -> Move {
        self.stats.calls += 1;

        if req.agent == req.target {
            self.plan.clear();
            return Move::hold(req.agent, Decision::GoalReached);
        }

        let Some(start) = req.grid.traversable_index(req.agent) else {
            warn!(tick = %req.now, agent = %req.agent, "agent stands on an untraversable cell");
            self.plan.clear();
            return Move::hold(req.agent, Decision::InvalidStart);
        };

        if let Some(p) = self.plan.replay(req.grid, req.agent, req.now) {
            self.stats.replays += 1;
            return Move { position: p, decision: Decision::Replayed };
        }

        let remaining = req.trajectory.remaining_moves(req.now);
        if remaining == 0 {
            self.plan.clear();
            return Move::hold(req.agent, Decision::HorizonExhausted);
        }
        // Steps are u32; a longer horizon than that is not reachable anyway.
        let remaining = u32::try_from(remaining).unwrap_or(u32::MAX - 1);

        self.plan_fresh(req, start, remaining)
    }
}
