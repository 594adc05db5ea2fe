//! Running many independent scenarios.

use pt_planner::PursuitPolicy;
use pt_scenario::Scenario;

use crate::{NoopObserver, PursuitBuilder, RunConfig, RunSummary, SimResult};

/// Run every scenario to completion with a fresh policy from `make_policy`.
///
/// Results come back in input order.  With the `parallel` feature the runs
/// are spread over Rayon's thread pool; each run still owns its own policy,
/// so the summaries match a sequential pass under [`Timing::Unit`].
///
/// [`Timing::Unit`]: crate::Timing::Unit
pub fn run_batch<P, F>(
    scenarios:   Vec<Scenario>,
    config:      &RunConfig,
    make_policy: F,
) -> Vec<SimResult<RunSummary>>
where
    P: PursuitPolicy + Send,
    F: Fn() -> P + Sync + Send,
{
    let run_one = |scenario: Scenario| -> SimResult<RunSummary> {
        PursuitBuilder::new(scenario, make_policy())
            .config(config.clone())
            .build()?
            .run(&mut NoopObserver)
    };

    #[cfg(not(feature = "parallel"))]
    {
        scenarios.into_iter().map(run_one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        scenarios.into_par_iter().map(run_one).collect()
    }
}
