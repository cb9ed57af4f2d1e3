// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Travel driver.
//!
//! The engine walks the ant inside a [`SimulationContext`], runs the pattern
//! detector on a throttled schedule, and turns an accepted period into a
//! black count for the target move count.
//!
//! # Schedule
//!
//! Detection is the expensive part: in the worst case a single attempt is
//! quadratic in the move index, so it only runs at move indices `i` with
//! `i >= detection_delay` and `(i - detection_delay) % detection_cadence == 0`.
//! The cadence is a performance knob; the delay also keeps the detector away
//! from the chaotic phase, where short accidental repeats live.
//!
//! # Example
//!
//! ```
//! use langton_highway::config::TravelConfig;
//! use langton_highway::engine::{solve, SolveMethod};
//!
//! // Small targets are answered by walking the ant.
//! let config = TravelConfig::builder().target_moves(11_000).build().unwrap();
//! let solution = solve(&config).unwrap();
//! assert_eq!(solution.method, SolveMethod::Direct);
//! ```

use crate::config::{DetectionMode, TravelConfig};
use crate::context::SimulationContext;
use crate::detect::{self, Pattern, ScanTally};
use crate::error::{HighwayError, Result};
use crate::extrapolate;
use crate::state::{Counters, StatisticsSnapshot};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// How a [`Solution`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveMethod {
    /// The target was inside the horizon and was walked move by move.
    Direct,
    /// The target was reached by repeating a detected period.
    Extrapolated,
}

/// Answer of a travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub target_moves: u64,
    pub black_count: u64,
    pub method: SolveMethod,
    pub pattern: Option<Pattern>,
    pub period_length: Option<usize>,
    pub period_black_delta: Option<i64>,
    pub moves_simulated: usize,
    pub statistics: StatisticsSnapshot,
}

/// Drives one travel under a fixed configuration.
#[derive(Debug, Clone)]
pub struct TravelEngine {
    config: TravelConfig,
}

impl TravelEngine {
    pub fn new(config: TravelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TravelConfig {
        &self.config
    }

    /// Whether detection runs at `move_index`.
    pub fn is_detection_move(&self, move_index: usize) -> bool {
        let delay = self.config.detection_delay;
        move_index >= delay && (move_index - delay) % self.config.detection_cadence == 0
    }

    /// Walk the ant up to the horizon looking for a period.
    ///
    /// Returns `Ok(None)` when the horizon is reached without an accepted
    /// period. `ctx` is expected to be fresh.
    pub fn travel(&self, ctx: &mut SimulationContext) -> Result<Option<Pattern>> {
        info!(
            horizon = self.config.horizon,
            delay = self.config.detection_delay,
            cadence = self.config.detection_cadence,
            repeats = self.config.repeat_count,
            mode = %self.config.mode,
            "Starting travel"
        );
        match self.config.mode {
            DetectionMode::Online => self.travel_online(ctx),
            DetectionMode::Offline => self.travel_offline(ctx),
        }
    }

    fn travel_online(&self, ctx: &mut SimulationContext) -> Result<Option<Pattern>> {
        while ctx.moves() < self.config.horizon {
            ctx.advance()?;
            let current = ctx.moves() - 1;
            if self.is_detection_move(current) {
                if let Some(pattern) = self.detect_at(ctx, current) {
                    return Ok(Some(pattern));
                }
            }
        }
        Ok(None)
    }

    fn travel_offline(&self, ctx: &mut SimulationContext) -> Result<Option<Pattern>> {
        ctx.advance_to(self.config.horizon)?;

        let delay = self.config.detection_delay;
        let cadence = self.config.detection_cadence;
        let mut current = ctx.moves() - 1;
        while current >= delay {
            if let Some(pattern) = self.detect_at(ctx, current) {
                return Ok(Some(pattern));
            }
            match current.checked_sub(cadence) {
                Some(previous) => current = previous,
                None => break,
            }
        }
        Ok(None)
    }

    fn detect_at(&self, ctx: &mut SimulationContext, current: usize) -> Option<Pattern> {
        let mut tally = ScanTally::default();
        let found = detect::scan(&ctx.history, current, self.config.repeat_count, &mut tally);

        let stats = &mut ctx.statistics;
        stats.increment(Counters::DetectionAttempts);
        stats.add(Counters::CandidatesExamined, tally.candidates_examined);
        stats.add(Counters::CandidatesRejected, tally.candidates_rejected);

        match found {
            Some(pattern) => debug!(
                current,
                start = pattern.start,
                end = pattern.end,
                len = pattern.len(),
                "Accepted period"
            ),
            None => debug!(current, examined = tally.candidates_examined, "No period"),
        }
        found
    }

    /// Answer the configured target inside `ctx`.
    pub fn run(&self, ctx: &mut SimulationContext) -> Result<Solution> {
        let target = self.config.target_moves;

        if target <= self.config.horizon as u64 {
            let moves = target as usize;
            ctx.advance_to(moves)?;
            let black_count = recorded_count(ctx, moves)?;
            info!(target_moves = target, black_count, "Answered by direct walk");
            return Ok(Solution {
                target_moves: target,
                black_count,
                method: SolveMethod::Direct,
                pattern: None,
                period_length: None,
                period_black_delta: None,
                moves_simulated: ctx.moves(),
                statistics: ctx.statistics.snapshot(),
            });
        }

        let Some(pattern) = self.travel(ctx)? else {
            warn!(moves = ctx.moves(), "Pattern detection failed");
            return Err(HighwayError::DetectionFailed { moves: ctx.moves() });
        };

        let black_count = extrapolate::black_count_at(&ctx.history, target, &pattern)?;
        let delta = extrapolate::period_black_delta(&ctx.history, &pattern);
        info!(
            target_moves = target,
            black_count,
            start = pattern.start,
            period = pattern.len(),
            delta,
            "Extrapolated across highway period"
        );
        Ok(Solution {
            target_moves: target,
            black_count,
            method: SolveMethod::Extrapolated,
            pattern: Some(pattern),
            period_length: Some(pattern.len()),
            period_black_delta: Some(delta),
            moves_simulated: ctx.moves(),
            statistics: ctx.statistics.snapshot(),
        })
    }
}

fn recorded_count(ctx: &SimulationContext, moves: usize) -> Result<u64> {
    let count = ctx
        .history
        .black_count_at(moves)
        .ok_or(HighwayError::CapacityExceeded {
            capacity: ctx.history.capacity(),
        })?;
    u64::try_from(count).map_err(|_| HighwayError::ArithmeticOverflow)
}

/// Validate `config`, allocate a fresh context, and answer its target.
pub fn solve(config: &TravelConfig) -> Result<Solution> {
    config.validate()?;
    let engine = TravelEngine::new(config.clone());
    let mut ctx = SimulationContext::new(config);
    engine.run(&mut ctx)
}
