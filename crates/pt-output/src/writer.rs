//! The `TrajectoryWriter` trait implemented by recording backends.

use crate::{OutputResult, TrajectoryRow};

/// Sink for recorded trajectory rows.
///
/// Errors surface through [`TrajectoryRecorder::take_error`] when driven by
/// the recorder.
///
/// [`TrajectoryRecorder::take_error`]: crate::TrajectoryRecorder::take_error
pub trait TrajectoryWriter {
    fn write_row(&mut self, row: &TrajectoryRow) -> OutputResult<()>;

    /// Flush buffered rows.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
