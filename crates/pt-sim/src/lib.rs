//! `pt-sim`: stepping loop for the pursuit simulator.
//!
//! # One tick
//!
//! ```text
//! loop:
//!   ① Plan     policy.next_move(grid, trajectory, agent, target(now), now)
//!   ② Audit    reject out-of-map, obstacle, or non-adjacent moves (fatal)
//!   ③ Time     move_ticks = Timing::ticks_for(planning time);
//!              stop if now + move_ticks >= trajectory length
//!   ④ Apply    now += move_ticks; path_cost += move_ticks × cost(old cell);
//!              moves += 1 unless the agent stayed
//!   ⑤ Capture  stop if agent == target(now)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`run_batch`] runs scenarios on Rayon's thread pool.   |
//! | `serde`    | Serde derives on [`RunConfig`] and [`RunSummary`].     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pt_planner::InterceptPlanner;
//! use pt_scenario::load_scenario;
//! use pt_sim::{NoopObserver, PursuitBuilder, RunConfig};
//!
//! let scenario = load_scenario("map1.txt")?;
//! let mut pursuit = PursuitBuilder::new(scenario, InterceptPlanner::new())
//!     .config(RunConfig::unit())
//!     .build()?;
//! let summary = pursuit.run(&mut NoopObserver)?;
//! println!("caught: {}", summary.caught());
//! ```

pub mod audit;
pub mod batch;
pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use audit::audit_move;
pub use batch::run_batch;
pub use builder::PursuitBuilder;
pub use config::{RunConfig, Timing};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, PursuitObserver};
pub use sim::{Pursuit, RunSummary, StopReason};
