//! Fluent builder for constructing a [`Pursuit`].

use pt_core::{Position, Tick};
use pt_planner::PursuitPolicy;
use pt_scenario::Scenario;

use crate::{Pursuit, RunConfig, SimError, SimResult};

/// Fluent builder for [`Pursuit<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                      |
/// |------------------|------------------------------|
/// | `.config(c)`     | `RunConfig::default()`       |
/// | `.start_at(p)`   | `scenario.agent_start`       |
///
/// # Example
///
/// ```rust,ignore
/// let scenario = load_scenario("map3.txt")?;
/// let mut pursuit = PursuitBuilder::new(scenario, InterceptPlanner::new())
///     .config(RunConfig::unit())
///     .build()?;
/// let summary = pursuit.run(&mut NoopObserver)?;
/// ```
pub struct PursuitBuilder<P: PursuitPolicy> {
    scenario: Scenario,
    policy:   P,
    config:   Option<RunConfig>,
    start:    Option<Position>,
}

impl<P: PursuitPolicy> PursuitBuilder<P> {
    pub fn new(scenario: Scenario, policy: P) -> Self {
        Self { scenario, policy, config: None, start: None }
    }

    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the scenario's agent start cell.
    pub fn start_at(mut self, start: Position) -> Self {
        self.start = Some(start);
        self
    }

    /// Validate the start cell and return a ready-to-run [`Pursuit`].
    ///
    /// A start on an obstacle is accepted; the planner holds there and the
    /// first audit rejects the move.
    pub fn build(self) -> SimResult<Pursuit<P>> {
        let agent = self.start.unwrap_or(self.scenario.agent_start);
        if !self.scenario.grid.in_bounds(agent) {
            return Err(SimError::Config(format!(
                "agent start {agent} is outside the {}x{} map",
                self.scenario.grid.width(),
                self.scenario.grid.height(),
            )));
        }

        Ok(Pursuit {
            config:    self.config.unwrap_or_default(),
            scenario:  self.scenario,
            policy:    self.policy,
            agent,
            now:       Tick::ZERO,
            moves:     0,
            path_cost: 0,
            calls:     0,
            stopped:   None,
        })
    }
}
