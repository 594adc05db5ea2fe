//! `pt-output`: trajectory recording for pursuit runs.
//!
//! The recorded file is one headerless `t,x,y` record per accepted move,
//! preceded by the starting cell at `t = 0`:
//!
//! ```text
//! 0,1,1
//! 1,2,2
//! 2,3,3
//! ```
//!
//! Writers implement [`TrajectoryWriter`] and are driven by
//! [`TrajectoryRecorder`], which implements `pt_sim::PursuitObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pt_output::{CsvTrajectoryWriter, TrajectoryRecorder};
//!
//! let writer = CsvTrajectoryWriter::from_path("robot_trajectory.txt")?;
//! let mut rec = TrajectoryRecorder::new(writer);
//! pursuit.run(&mut rec)?;
//! if let Some(e) = rec.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvTrajectoryWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrajectoryRecorder;
pub use row::TrajectoryRow;
pub use writer::TrajectoryWriter;
