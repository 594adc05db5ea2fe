//! `TrajectoryRecorder<W>`: bridges `PursuitObserver` to a `TrajectoryWriter`.

use pt_core::{Position, Tick};
use pt_planner::Move;
use pt_sim::{PursuitObserver, RunSummary};

use crate::writer::TrajectoryWriter;
use crate::{OutputError, OutputResult, TrajectoryRow};

/// A [`PursuitObserver`] that writes the starting cell and every accepted
/// move to any [`TrajectoryWriter`].
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `pursuit.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct TrajectoryRecorder<W: TrajectoryWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: TrajectoryWriter> TrajectoryRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Rows handed to the writer so far, failed writes included.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Take the stored write error (if any) after `pursuit.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect the rows after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn record(&mut self, tick: Tick, at: Position) {
        self.rows += 1;
        let result = self.writer.write_row(&TrajectoryRow::new(tick, at));
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TrajectoryWriter> PursuitObserver for TrajectoryRecorder<W> {
    fn on_start(&mut self, tick: Tick, agent: Position) {
        self.record(tick, agent);
    }

    fn on_move(&mut self, tick: Tick, agent: Position, _mv: &Move) {
        self.record(tick, agent);
    }

    fn on_finish(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
