//! Map file loader.
//!
//! # File format
//!
//! Section markers on their own line, values comma-separated:
//!
//! ```text
//! N
//! 4,3              grid size: x_size,y_size
//! C
//! 5                collision threshold
//! R
//! 1,1              agent start
//! T
//! 4,3              target position at tick 0
//! 4,2              … one line per tick
//! M
//! 1,1,1            x_size lines of y_size costs
//! 1,9,1
//! 1,1,1
//! 1,1,1
//! ```
//!
//! The map section is **column-major**: line `i` of the `M` block holds the
//! costs of column `x = i + 1`, its `j`-th value being the cost at `y = j + 1`.
//! Numbers written as decimals (`3.0`) are truncated to integers.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use pt_core::{CostGrid, Position, Trajectory};

use crate::{Scenario, ScenarioError, ScenarioResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scenario from a map file.
pub fn load_scenario(path: &Path) -> ScenarioResult<Scenario> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(file)
}

/// Like [`load_scenario`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded maps.
pub fn load_scenario_reader<R: Read>(reader: R) -> ScenarioResult<Scenario> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line());
        records.push(Line { line, record });
    }

    let mut cur = Cursor { records: &records, pos: 0 };

    cur.expect_marker("N")?;
    let (x_size, y_size) = cur.next_pair()?;
    cur.expect_marker("C")?;
    let threshold = cur.next_single()?;
    cur.expect_marker("R")?;
    let (rx, ry) = cur.next_pair()?;
    cur.expect_marker("T")?;

    let mut points = Vec::new();
    loop {
        let line = cur.next_line("trajectory point or M")?;
        if line.is_marker("M") {
            break;
        }
        let (tx, ty) = line.pair()?;
        points.push(Position::new(tx, ty));
    }
    if points.is_empty() {
        return Err(cur.error("trajectory section is empty"));
    }

    let cells = CostGrid::cell_count_for(x_size, y_size)?;
    let (w, h) = (x_size as usize, y_size as usize);
    let mut costs = vec![0; cells];
    for i in 0..w {
        let line = cur.next_line("map row")?;
        if line.record.len() != h {
            return Err(line.error(format!(
                "map row {} has {} values, expected {h}",
                i + 1,
                line.record.len()
            )));
        }
        for (j, field) in line.record.iter().enumerate() {
            costs[j * w + i] = line.int(field)?;
        }
    }
    if cur.pos < records.len() {
        warn!(extra = records.len() - cur.pos, "ignoring lines after the map section");
    }

    let scenario = Scenario {
        grid:        CostGrid::new(x_size, y_size, threshold, costs)?,
        agent_start: Position::new(rx, ry),
        trajectory:  Trajectory::new(points)?,
    };
    debug!(
        width = x_size, height = y_size, threshold, steps = scenario.trajectory.len(),
        "scenario loaded"
    );
    Ok(scenario)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Line {
    line:   u64,
    record: StringRecord,
}

impl Line {
    fn error(&self, msg: impl Into<String>) -> ScenarioError {
        ScenarioError::Parse { line: self.line, msg: msg.into() }
    }

    fn is_marker(&self, marker: &str) -> bool {
        self.record.len() == 1 && &self.record[0] == marker
    }

    fn int(&self, field: &str) -> ScenarioResult<i32> {
        if let Ok(v) = field.parse::<i32>() {
            return Ok(v);
        }
        match field.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v as i32),
            _ => Err(self.error(format!("expected a number, got {field:?}"))),
        }
    }

    fn pair(&self) -> ScenarioResult<(i32, i32)> {
        if self.record.len() != 2 {
            return Err(self.error(format!("expected 2 values, got {}", self.record.len())));
        }
        Ok((self.int(&self.record[0])?, self.int(&self.record[1])?))
    }
}

struct Cursor<'a> {
    records: &'a [Line],
    pos:     usize,
}

impl<'a> Cursor<'a> {
    fn error(&self, msg: impl Into<String>) -> ScenarioError {
        let line = self.records.last().map_or(0, |l| l.line);
        ScenarioError::Parse { line, msg: msg.into() }
    }

    fn next_line(&mut self, what: &str) -> ScenarioResult<&'a Line> {
        let line = self
            .records
            .get(self.pos)
            .ok_or_else(|| self.error(format!("unexpected end of file, expected {what}")))?;
        self.pos += 1;
        Ok(line)
    }

    fn expect_marker(&mut self, marker: &str) -> ScenarioResult<()> {
        let line = self.next_line(marker)?;
        if !line.is_marker(marker) {
            return Err(line.error(format!("expected section marker {marker:?}")));
        }
        Ok(())
    }

    fn next_pair(&mut self) -> ScenarioResult<(i32, i32)> {
        self.next_line("two values")?.pair()
    }

    fn next_single(&mut self) -> ScenarioResult<i32> {
        let line = self.next_line("a value")?;
        if line.record.len() != 1 {
            return Err(line.error(format!("expected 1 value, got {}", line.record.len())));
        }
        line.int(&line.record[0])
    }
}
