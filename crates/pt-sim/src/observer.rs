//! Run observer trait for progress reporting and data collection.

use pt_core::{Position, Tick};
use pt_planner::Move;

use crate::RunSummary;

/// Callbacks invoked by [`Pursuit::run`][crate::Pursuit::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct Printer;
///
/// impl PursuitObserver for Printer {
///     fn on_move(&mut self, tick: Tick, agent: Position, mv: &Move) {
///         println!("{tick}: {agent} ({:?})", mv.decision);
///     }
/// }
/// ```
pub trait PursuitObserver {
    /// Called once before the first planner call with the starting state.
    fn on_start(&mut self, _tick: Tick, _agent: Position) {}

    /// Called after each accepted move with the new clock and agent cell.
    ///
    /// Moves that would cross the horizon are not reported.
    fn on_move(&mut self, _tick: Tick, _agent: Position, _mv: &Move) {}

    /// Called once when the run stops.
    fn on_finish(&mut self, _summary: &RunSummary) {}
}

/// A [`PursuitObserver`] that does nothing.
pub struct NoopObserver;

impl PursuitObserver for NoopObserver {}
