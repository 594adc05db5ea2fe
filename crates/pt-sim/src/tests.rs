//! Unit tests for pt-sim.
//!
//! Every run uses `Timing::Unit` unless a test is about timing itself.

#[cfg(test)]
mod helpers {
    use pt_core::{CostGrid, Position, Trajectory};
    use pt_planner::{Decision, Move, PlanRequest, PursuitPolicy};
    use pt_scenario::Scenario;

    pub fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    pub fn scenario(grid: CostGrid, start: Position, points: Vec<Position>) -> Scenario {
        Scenario { grid, agent_start: start, trajectory: Trajectory::new(points).unwrap() }
    }

    /// 5×5, cost 2 everywhere, target parked at (4,4) for 10 ticks.
    pub fn open_field() -> Scenario {
        Scenario {
            grid:        CostGrid::uniform(5, 5, 5, 2).unwrap(),
            agent_start: p(1, 1),
            trajectory:  Trajectory::stationary(p(4, 4), 10).unwrap(),
        }
    }

    /// `[1, 9, 1]` corridor: the obstacle at x=2 seals the target off.
    pub fn sealed_corridor() -> Scenario {
        Scenario {
            grid:        CostGrid::new(3, 1, 5, vec![1, 9, 1]).unwrap(),
            agent_start: p(1, 1),
            trajectory:  Trajectory::stationary(p(3, 1), 4).unwrap(),
        }
    }

    /// Replays a fixed list of positions, holding once it runs out.
    pub struct Scripted(pub Vec<Position>);

    impl PursuitPolicy for Scripted {
        fn next_move(&mut self, req: &PlanRequest<'_>) -> Move {
            let position = if self.0.is_empty() { req.agent } else { self.0.remove(0) };
            Move { position, decision: Decision::GreedyStep }
        }
    }
}

// ── Timing ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timing {
    use std::time::Duration;

    use crate::{RunConfig, Timing};

    #[test]
    fn wall_clock_charges_whole_seconds_with_a_floor_of_one() {
        assert_eq!(Timing::WallClock.ticks_for(Duration::ZERO), 1);
        assert_eq!(Timing::WallClock.ticks_for(Duration::from_millis(999)), 1);
        assert_eq!(Timing::WallClock.ticks_for(Duration::from_millis(2_700)), 2);
    }

    #[test]
    fn unit_timing_ignores_elapsed() {
        assert_eq!(Timing::Unit.ticks_for(Duration::from_secs(30)), 1);
    }

    #[test]
    fn default_config_is_wall_clock_without_limit() {
        let c = RunConfig::default();
        assert_eq!(c.timing, Timing::WallClock);
        assert_eq!(c.max_calls, None);
        assert_eq!(RunConfig::unit().timing, Timing::Unit);
    }
}

// ── Audit ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod audit {
    use pt_core::{CostGrid, Tick};

    use super::helpers::p;
    use crate::{audit_move, SimError};

    #[test]
    fn legal_moves_pass() {
        let grid = CostGrid::uniform(3, 3, 5, 1).unwrap();
        assert!(audit_move(&grid, Tick(0), p(2, 2), p(3, 3)).is_ok());
        assert!(audit_move(&grid, Tick(0), p(2, 2), p(2, 2)).is_ok(), "staying is legal");
    }

    #[test]
    fn threshold_cost_is_an_obstacle() {
        let grid = CostGrid::new(2, 1, 5, vec![1, 5]).unwrap();
        assert_eq!(
            audit_move(&grid, Tick(4), p(1, 1), p(2, 1)),
            Err(SimError::Collision { tick: Tick(4), to: p(2, 1), cost: 5 }),
        );
    }

    #[test]
    fn out_of_map_is_checked_before_adjacency() {
        let grid = CostGrid::uniform(3, 3, 5, 1).unwrap();
        let err = audit_move(&grid, Tick(0), p(1, 1), p(9, 9)).unwrap_err();
        assert_eq!(err, SimError::OutOfMap { tick: Tick(0), to: p(9, 9) });
        assert!(err.is_illegal_move());
        assert!(!SimError::Config("x".into()).is_illegal_move());
    }
}

// ── Stepping loop ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod pursuit {
    use pt_core::{CostGrid, Tick};
    use pt_planner::InterceptPlanner;

    use super::helpers::{open_field, p, scenario, sealed_corridor, Scripted};
    use crate::{NoopObserver, PursuitBuilder, RunConfig, SimError, StopReason};

    #[test]
    fn catches_a_parked_target_along_the_diagonal() {
        let mut sim = PursuitBuilder::new(open_field(), InterceptPlanner::new())
            .config(RunConfig::unit())
            .build()
            .unwrap();
        let s = sim.run(&mut NoopObserver).unwrap();

        assert!(s.caught());
        assert_eq!(s.elapsed, Tick(3));
        assert_eq!(s.moves, 3);
        assert_eq!(s.path_cost, 6);
        assert_eq!(s.planner_calls, 3);
        assert_eq!(s.final_agent, p(4, 4));
        assert_eq!(sim.policy.stats().replays, 2, "one search then two replays");
    }

    #[test]
    fn meets_an_approaching_target_and_waits_for_it() {
        let grid = CostGrid::uniform(6, 1, 5, 1).unwrap();
        let sc = scenario(grid, p(1, 1), vec![
            p(6, 1), p(5, 1), p(4, 1), p(3, 1), p(3, 1), p(3, 1),
        ]);
        let mut sim = PursuitBuilder::new(sc, InterceptPlanner::new())
            .config(RunConfig::unit())
            .build()
            .unwrap();
        let s = sim.run(&mut NoopObserver).unwrap();

        assert!(s.caught());
        assert_eq!(s.elapsed, Tick(3));
        assert_eq!(s.moves, 2, "the wait tick is not a move");
        assert_eq!(s.path_cost, 3, "waiting still pays for the occupied cell");
        assert_eq!(s.final_agent, p(3, 1));
    }

    #[test]
    fn sealed_off_agent_waits_out_the_horizon() {
        let mut sim = PursuitBuilder::new(sealed_corridor(), InterceptPlanner::new())
            .config(RunConfig::unit())
            .build()
            .unwrap();
        let s = sim.run(&mut NoopObserver).unwrap();

        assert_eq!(s.stop, StopReason::Horizon);
        assert_eq!(s.elapsed, Tick(3));
        assert_eq!(s.moves, 0);
        assert_eq!(s.path_cost, 3);
        assert_eq!(s.planner_calls, 4, "the final call is made but its move is dropped");
        assert_eq!(s.final_agent, p(1, 1));
    }

    #[test]
    fn stay_dropped_at_the_horizon_does_not_touch_the_move_count() {
        // One real move, one applied stay, then a stay that would cross the
        // horizon and is dropped without adjusting `moves`.
        let grid = CostGrid::uniform(3, 3, 5, 2).unwrap();
        let sc = scenario(grid, p(1, 1), vec![p(3, 3); 3]);
        let mut sim = PursuitBuilder::new(sc, Scripted(vec![p(2, 2), p(2, 2)]))
            .config(RunConfig::unit())
            .build()
            .unwrap();
        let s = sim.run(&mut NoopObserver).unwrap();

        assert_eq!(s.stop, StopReason::Horizon);
        assert_eq!(s.planner_calls, 3);
        assert_eq!(s.elapsed, Tick(2));
        assert_eq!(s.moves, 1);
        assert_eq!(s.path_cost, 4);
        assert_eq!(s.final_agent, p(2, 2));
    }

    #[test]
    fn single_point_trajectory_stops_after_one_call() {
        let grid = CostGrid::uniform(3, 3, 5, 1).unwrap();
        let sc = scenario(grid, p(1, 1), vec![p(3, 3)]);
        let mut sim = PursuitBuilder::new(sc, InterceptPlanner::new())
            .config(RunConfig::unit())
            .build()
            .unwrap();
        let s = sim.run(&mut NoopObserver).unwrap();

        assert_eq!(s.stop, StopReason::Horizon);
        assert_eq!(s.elapsed, Tick(0));
        assert_eq!(s.planner_calls, 1);
    }

    #[test]
    fn starting_on_the_target_is_caught_after_one_tick() {
        let grid = CostGrid::uniform(3, 3, 5, 2).unwrap();
        let sc = scenario(grid, p(2, 2), vec![p(2, 2); 5]);
        let mut sim = PursuitBuilder::new(sc, InterceptPlanner::new())
            .config(RunConfig::unit())
            .build()
            .unwrap();
        let s = sim.run(&mut NoopObserver).unwrap();

        assert!(s.caught());
        assert_eq!(s.elapsed, Tick(1));
        assert_eq!(s.moves, 0);
        assert_eq!(s.path_cost, 2);
    }

    #[test]
    fn call_limit_stops_early() {
        let config = RunConfig { max_calls: Some(2), ..RunConfig::unit() };
        let mut sim = PursuitBuilder::new(open_field(), InterceptPlanner::new())
            .config(config)
            .build()
            .unwrap();
        let s = sim.run(&mut NoopObserver).unwrap();

        assert_eq!(s.stop, StopReason::CallLimit);
        assert_eq!(s.planner_calls, 2);
        assert_eq!(s.elapsed, Tick(2));
        assert_eq!(s.final_agent, p(3, 3));
    }

    #[test]
    fn step_after_stop_is_inert() {
        let mut sim = PursuitBuilder::new(open_field(), InterceptPlanner::new())
            .config(RunConfig::unit())
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        assert_eq!(sim.step(&mut NoopObserver), Ok(Some(StopReason::Caught)));
        assert_eq!(sim.policy.stats().calls, 3);
        assert_eq!(sim.now(), Tick(3));
    }

    #[test]
    fn manual_stepping_matches_run() {
        let mut sim = PursuitBuilder::new(open_field(), InterceptPlanner::new())
            .config(RunConfig::unit())
            .build()
            .unwrap();

        assert_eq!(sim.step(&mut NoopObserver), Ok(None));
        assert_eq!(sim.agent(), p(2, 2));
        assert_eq!(sim.now(), Tick(1));
        assert_eq!(sim.step(&mut NoopObserver), Ok(None));
        assert_eq!(sim.step(&mut NoopObserver), Ok(Some(StopReason::Caught)));
    }

    #[test]
    fn illegal_moves_abort_the_run() {
        let grid = CostGrid::new(3, 3, 5, vec![1, 9, 1, 1, 1, 1, 1, 1, 1]).unwrap();
        let sc = scenario(grid, p(1, 1), vec![p(3, 3); 6]);

        let cases = [
            (p(0, 1), SimError::OutOfMap { tick: Tick(0), to: p(0, 1) }),
            (p(2, 1), SimError::Collision { tick: Tick(0), to: p(2, 1), cost: 9 }),
            (p(3, 3), SimError::NotAdjacent { tick: Tick(0), from: p(1, 1), to: p(3, 3) }),
        ];
        for (to, expected) in cases {
            let mut sim = PursuitBuilder::new(sc.clone(), Scripted(vec![to]))
                .config(RunConfig::unit())
                .build()
                .unwrap();
            assert_eq!(sim.run(&mut NoopObserver), Err(expected));
        }
    }

    #[test]
    fn illegal_move_later_in_the_run_reports_its_tick() {
        let grid = CostGrid::uniform(4, 4, 5, 1).unwrap();
        let sc = scenario(grid, p(1, 1), vec![p(4, 4); 8]);
        let mut sim = PursuitBuilder::new(sc, Scripted(vec![p(2, 2), p(4, 4)]))
            .config(RunConfig::unit())
            .build()
            .unwrap();

        assert_eq!(
            sim.run(&mut NoopObserver),
            Err(SimError::NotAdjacent { tick: Tick(1), from: p(2, 2), to: p(4, 4) }),
        );
    }

    #[test]
    fn builder_rejects_start_outside_the_map() {
        let res = PursuitBuilder::new(open_field(), InterceptPlanner::new())
            .start_at(p(6, 1))
            .build();
        assert!(matches!(res, Err(SimError::Config(_))));
    }

    #[test]
    fn builder_start_override_is_used() {
        let sim = PursuitBuilder::new(open_field(), InterceptPlanner::new())
            .start_at(p(3, 3))
            .build()
            .unwrap();
        assert_eq!(sim.agent(), p(3, 3));
        assert_eq!(sim.now(), Tick::ZERO);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use pt_core::{Position, Tick};
    use pt_planner::{Decision, InterceptPlanner, Move};

    use super::helpers::{open_field, p};
    use crate::{PursuitBuilder, PursuitObserver, RunConfig, RunSummary};

    #[derive(Default)]
    struct Recorder {
        start:  Option<(Tick, Position)>,
        moves:  Vec<(Tick, Position, Decision)>,
        finish: Option<RunSummary>,
    }

    impl PursuitObserver for Recorder {
        fn on_start(&mut self, tick: Tick, agent: Position) {
            self.start = Some((tick, agent));
        }
        fn on_move(&mut self, tick: Tick, agent: Position, mv: &Move) {
            self.moves.push((tick, agent, mv.decision));
        }
        fn on_finish(&mut self, summary: &RunSummary) {
            self.finish = Some(*summary);
        }
    }

    #[test]
    fn hooks_see_every_accepted_move() {
        let mut sim = PursuitBuilder::new(open_field(), InterceptPlanner::new())
            .config(RunConfig::unit())
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let summary = sim.run(&mut rec).unwrap();

        assert_eq!(rec.start, Some((Tick(0), p(1, 1))));
        assert_eq!(rec.moves, vec![
            (Tick(1), p(2, 2), Decision::ChaseTarget { steps: 3 }),
            (Tick(2), p(3, 3), Decision::Replayed),
            (Tick(3), p(4, 4), Decision::Replayed),
        ]);
        assert_eq!(rec.finish, Some(summary));
    }
}

// ── Batch ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch {
    use pt_planner::InterceptPlanner;

    use super::helpers::{open_field, sealed_corridor};
    use crate::{run_batch, NoopObserver, PursuitBuilder, RunConfig, StopReason};

    #[test]
    fn batch_matches_sequential_runs_in_order() {
        let config = RunConfig::unit();
        let scenarios = vec![open_field(), sealed_corridor(), open_field()];

        let expected: Vec<_> = scenarios
            .iter()
            .cloned()
            .map(|sc| {
                PursuitBuilder::new(sc, InterceptPlanner::new())
                    .config(config.clone())
                    .build()
                    .unwrap()
                    .run(&mut NoopObserver)
            })
            .collect();
        let got = run_batch(scenarios, &config, InterceptPlanner::new);

        assert_eq!(got, expected);
        assert_eq!(got[1].as_ref().unwrap().stop, StopReason::Horizon);
    }

    #[test]
    fn batch_reports_per_scenario_errors() {
        let mut bad = open_field();
        bad.agent_start = pt_core::Position::new(0, 0);
        let got = run_batch(vec![bad, open_field()], &RunConfig::unit(), InterceptPlanner::new);

        assert!(got[0].is_err());
        assert!(got[1].as_ref().unwrap().caught());
    }
}
