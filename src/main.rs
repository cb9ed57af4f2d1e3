// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `langton`: black cells of Langton's ant after a huge number of moves.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use langton_highway::geometry::Heading;
use langton_highway::walker::WalkerState;
use langton_highway::{solve, DetectionMode, HighwayError, Solution, TravelConfig};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "langton",
    version,
    about = "Count black cells of Langton's ant by detecting its highway period"
)]
struct Cli {
    /// JSON file with a travel configuration; flags below override it.
    #[arg(long, env = "LANGTON_CONFIG")]
    config: Option<PathBuf>,

    /// Number of moves to answer for.
    #[arg(short = 'n', long)]
    target_moves: Option<u64>,

    /// Side of the square grid.
    #[arg(long)]
    grid_side: Option<usize>,

    /// Move ceiling of the travel.
    #[arg(long)]
    horizon: Option<usize>,

    /// Size of the history buffers (defaults to the horizon).
    #[arg(long)]
    history_capacity: Option<usize>,

    /// First move index eligible for detection.
    #[arg(long)]
    detection_delay: Option<usize>,

    /// Run detection once every this many moves.
    #[arg(long)]
    detection_cadence: Option<usize>,

    /// Required number of repeats of a period.
    #[arg(long)]
    repeat_count: Option<usize>,

    /// Starting row (defaults to the grid centre).
    #[arg(long, requires = "start_col")]
    start_row: Option<usize>,

    /// Starting column (defaults to the grid centre).
    #[arg(long, requires = "start_row")]
    start_col: Option<usize>,

    /// Starting heading: north, east, south or west.
    #[arg(long)]
    heading: Option<Heading>,

    /// Detection mode: online or offline.
    #[arg(long)]
    mode: Option<DetectionMode>,

    /// Print the solution as JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn travel_config(&self) -> Result<TravelConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                TravelConfig::from_json_str(&text)?
            }
            None => TravelConfig::default(),
        };

        if let Some(moves) = self.target_moves {
            config.target_moves = moves;
        }
        if let Some(side) = self.grid_side {
            config.grid_side = side;
        }
        if let Some(moves) = self.horizon {
            config.horizon = moves;
        }
        if let Some(moves) = self.history_capacity {
            config.history_capacity = Some(moves);
        }
        if let Some(moves) = self.detection_delay {
            config.detection_delay = moves;
        }
        if let Some(moves) = self.detection_cadence {
            config.detection_cadence = moves;
        }
        if let Some(repeats) = self.repeat_count {
            config.repeat_count = repeats;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        let start = config.start_state();
        let row = self.start_row.unwrap_or(start.row);
        let col = self.start_col.unwrap_or(start.col);
        let heading = self.heading.unwrap_or(start.heading);
        config.start = Some(WalkerState::new(row, col, heading));

        config.validate()?;
        Ok(config)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_solution(solution: &Solution, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(solution)?);
        return Ok(());
    }
    println!("Langton's ant problem:");
    if let (Some(pattern), Some(delta)) = (solution.pattern, solution.period_black_delta) {
        println!(
            "Highway period: moves {}..={} ({} moves, {:+} black cells)",
            pattern.start,
            pattern.end,
            pattern.len(),
            delta
        );
    }
    println!(
        "The number of the black cells for {} moves: {}",
        solution.target_moves, solution.black_count
    );
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = match cli.travel_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            return ExitCode::from(2);
        }
    };

    let started = Instant::now();
    let outcome = solve(&config);
    info!(elapsed_ms = started.elapsed().as_millis() as u64, "Travel finished");

    match outcome {
        Ok(solution) => match print_solution(&solution, cli.json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!("{:#}", err);
                ExitCode::from(2)
            }
        },
        Err(err @ HighwayError::DetectionFailed { .. }) => {
            eprintln!("ERROR: {}", err);
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            ExitCode::from(2)
        }
    }
}
