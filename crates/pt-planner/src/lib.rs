//! `pt-planner`: per-tick interception planning.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`search`]   | `search`, `SearchTree`, `Interception`, `interception_offsets` |
//! | [`fallback`] | `chase_target`, `greedy_step`                                |
//! | [`plan`]     | `PlanCache`: cross-call move queue                          |
//! | [`planner`]  | `PursuitPolicy` trait, `InterceptPlanner`, `Move`, `Decision` |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pt_planner::{InterceptPlanner, PlanRequest, PursuitPolicy};
//!
//! let mut planner = InterceptPlanner::new();
//! let mv = planner.next_move(&PlanRequest {
//!     grid: &grid,
//!     trajectory: &trajectory,
//!     agent,
//!     target: trajectory.at(now).unwrap(),
//!     now,
//! });
//! agent = mv.position;
//! ```

pub mod fallback;
pub mod plan;
pub mod planner;
pub mod search;


pub use fallback::{chase_target, greedy_step};
pub use plan::PlanCache;
pub use planner::{Decision, InterceptPlanner, Move, PlanRequest, PlannerStats, PursuitPolicy};
pub use search::{search, Interception, SearchOutcome, SearchTree};
