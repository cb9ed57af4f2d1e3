// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Simulation context.
//!
//! A `SimulationContext` owns everything one travel mutates:
//! - the grid
//! - the walker (the single `WalkerState`)
//! - the running black count
//! - the history buffers
//! - statistics
//!
//! All buffers are sized at construction. Nothing is global, so independent
//! contexts with different configurations can coexist.

use crate::config::TravelConfig;
use crate::error::{HighwayError, Result};
use crate::geometry::Grid;
use crate::history::History;
use crate::state::{Counters, Statistics};
use crate::walker::{StepOutcome, Walker, WalkerState};

#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub grid: Grid,
    pub walker: Walker,
    pub history: History,
    pub statistics: Statistics,
    black_count: i64,
}

impl SimulationContext {
    /// Allocate a session for `config`.
    pub fn new(config: &TravelConfig) -> Self {
        Self::with_parts(config.grid_side, config.capacity(), config.start_state())
    }

    pub fn with_parts(grid_side: usize, capacity: usize, start: WalkerState) -> Self {
        Self {
            grid: Grid::new(grid_side),
            walker: Walker::new(start),
            history: History::with_capacity(capacity),
            statistics: Statistics::new(),
            black_count: 0,
        }
    }

    /// Moves made so far.
    pub fn moves(&self) -> usize {
        self.history.len()
    }

    /// Current number of black cells.
    pub fn black_count(&self) -> i64 {
        self.black_count
    }

    /// Walk one move and record it.
    ///
    /// Capacity is checked before the grid is touched, so a
    /// [`HighwayError::CapacityExceeded`]
    /// leaves the session unchanged.
    pub fn advance(&mut self) -> Result<StepOutcome> {
        let move_index = self.history.len();
        if move_index >= self.history.capacity() {
            return Err(HighwayError::CapacityExceeded {
                capacity: self.history.capacity(),
            });
        }

        let outcome = self.walker.step(&mut self.grid, move_index)?;
        self.black_count += outcome.black_delta;
        self.history
            .record(move_index, outcome.move_id, self.black_count)?;
        self.statistics.increment(Counters::MovesSimulated);
        Ok(outcome)
    }

    /// Advance until `moves` moves are recorded.
    pub fn advance_to(&mut self, moves: usize) -> Result<()> {
        while self.moves() < moves {
            self.advance()?;
        }
        Ok(())
    }
}
