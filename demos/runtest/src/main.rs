//! runtest: run the interception planner against one map file.
//!
//! Loads the scenario, chases the target tick by tick, writes the agent's
//! path as `t,x,y` lines and prints the RESULT block.
//!
//! ```text
//! runtest maps/map3.txt --unit-time
//! RUST_LOG=pt_planner=debug runtest maps/map3.txt
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pt_output::{CsvTrajectoryWriter, TrajectoryRecorder};
use pt_planner::InterceptPlanner;
use pt_scenario::load_scenario;
use pt_sim::{PursuitBuilder, RunConfig, Timing};

/// Chase a moving target across a weighted grid map.
#[derive(Parser, Debug)]
#[command(name = "runtest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Map file: size, collision threshold, robot start, target trajectory, costs
    #[arg(value_name = "MAP")]
    map: PathBuf,

    /// Where to write the agent trajectory
    #[arg(short, long, value_name = "FILE", default_value = "robot_trajectory.txt")]
    output: PathBuf,

    /// Charge one tick per move instead of the planning wall-clock time
    #[arg(long)]
    unit_time: bool,

    /// Stop after this many planner calls
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Load the problem.
    println!("Reading problem definition from: {}", cli.map.display());
    let scenario = load_scenario(&cli.map)
        .with_context(|| format!("loading {}", cli.map.display()))?;
    let grid = &scenario.grid;
    println!("map size: {},{}", grid.width(), grid.height());
    println!("collision threshold: {}", grid.collision_threshold());
    println!("robot pose: {},{}", scenario.agent_start.x, scenario.agent_start.y);
    println!("target_steps: {}", scenario.target_steps());

    // 2. Configure the run.
    let config = RunConfig {
        timing:    if cli.unit_time { Timing::Unit } else { Timing::WallClock },
        max_calls: cli.max_steps,
    };
    let mut pursuit = PursuitBuilder::new(scenario, InterceptPlanner::new())
        .config(config)
        .build()?;

    // 3. Record to file.
    let writer = CsvTrajectoryWriter::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    let mut recorder = TrajectoryRecorder::new(writer);

    // 4. Run.
    println!("\nRunning planner");
    let t0 = Instant::now();
    let run = pursuit.run(&mut recorder);
    if let Some(e) = recorder.take_error() {
        eprintln!("output error: {e}");
    }
    let summary = run.context("pursuit aborted")?;
    let stats = pursuit.policy.stats();
    info!(
        wall_secs = t0.elapsed().as_secs_f64(), searches = stats.searches,
        replays = stats.replays, fallbacks = stats.fallbacks, "planner stats"
    );

    // 5. Report.
    println!("\nRESULT");
    println!("target caught = {}", u8::from(summary.caught()));
    println!("time taken (s) = {}", summary.elapsed.0);
    println!("moves made = {}", summary.moves);
    println!("path cost = {}", summary.path_cost);
    println!("trajectory written to {} ({} rows)", cli.output.display(), recorder.rows());

    Ok(())
}
