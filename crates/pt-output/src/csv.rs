//! Headerless `t,x,y` CSV backend.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::TrajectoryWriter;
use crate::{OutputResult, TrajectoryRow};

/// Writes one `t,x,y` record per row, without a header line.
pub struct CsvTrajectoryWriter<T: Write = File> {
    out:      Writer<T>,
    finished: bool,
}

impl CsvTrajectoryWriter<File> {
    /// Create (or truncate) the file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> OutputResult<Self> {
        let file = File::create(path)?;
        Ok(Self::from_writer(file))
    }
}

impl<T: Write> CsvTrajectoryWriter<T> {
    pub fn from_writer(inner: T) -> Self {
        Self {
            out:      WriterBuilder::new().has_headers(false).from_writer(inner),
            finished: false,
        }
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(mut self) -> OutputResult<T> {
        self.out.flush()?;
        self.out.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<T: Write> TrajectoryWriter for CsvTrajectoryWriter<T> {
    fn write_row(&mut self, row: &TrajectoryRow) -> OutputResult<()> {
        self.out.write_record(&[row.tick.to_string(), row.x.to_string(), row.y.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
