// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The ant.
//!
//! One step reads the current cell, classifies the move from the colour
//! *before* the flip and the heading *before* the turn, flips the cell, turns,
//! and advances. The ordering matters: the ids describe the decision that
//! produced the turn, not its result.

use crate::encoding::{encode, MoveId, REDUCED_ID_COUNT};
use crate::error::{HighwayError, Result};
use crate::geometry::{CellColor, Grid, Heading};
use serde::{Deserialize, Serialize};

/// New heading indexed by reduced id.
///
/// Ids 0..4 are white cells (turn right), ids 4..8 are black cells (turn left).
pub const TURN_TABLE: [Heading; REDUCED_ID_COUNT] = [
    Heading::East,  // white, north
    Heading::South, // white, east
    Heading::West,  // white, south
    Heading::North, // white, west
    Heading::West,  // black, north
    Heading::North, // black, east
    Heading::East,  // black, south
    Heading::South, // black, west
];

/// Position and heading of the ant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerState {
    pub row: usize,
    pub col: usize,
    pub heading: Heading,
}

impl WalkerState {
    pub fn new(row: usize, col: usize, heading: Heading) -> Self {
        Self { row, col, heading }
    }

    /// The centre cell of a grid, facing north.
    pub fn centered(side: usize) -> Self {
        Self::new(side / 2, side / 2, Heading::North)
    }
}

/// What one step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub move_id: MoveId,
    pub color_after_flip: CellColor,
    /// +1 if the cell turned black, -1 if it turned white.
    pub black_delta: i64,
}

/// Owns the single [`WalkerState`] of a session.
#[derive(Debug, Clone)]
pub struct Walker {
    state: WalkerState,
}

impl Walker {
    pub fn new(state: WalkerState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> WalkerState {
        self.state
    }

    /// Perform one move.
    ///
    /// `move_index` only labels a [`HighwayError::GridExceeded`] error. On that
    /// error the cell has already been flipped and the ant has not moved; the
    /// session cannot continue.
    pub fn step(&mut self, grid: &mut Grid, move_index: usize) -> Result<StepOutcome> {
        let WalkerState { row, col, heading } = self.state;

        let color = grid.color(row, col);
        let move_id = encode(color, heading, row, col, grid.side());
        let color_after_flip = grid.flip(row, col);
        let black_delta = if color_after_flip.is_black() { 1 } else { -1 };

        let heading = TURN_TABLE[move_id.reduced as usize];
        let (dr, dc) = heading.offset();
        let (next_row, next_col) = (row as i64 + dr, col as i64 + dc);
        if !grid.contains(next_row, next_col) {
            return Err(HighwayError::GridExceeded {
                row: next_row,
                col: next_col,
                side: grid.side(),
                move_index,
            });
        }

        self.state = WalkerState::new(next_row as usize, next_col as usize, heading);
        Ok(StepOutcome {
            move_id,
            color_after_flip,
            black_delta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{decode, reduced_id};
    use strum::IntoEnumIterator;

    #[test]
    fn test_turn_table_matches_rule() {
        for heading in Heading::iter() {
            assert_eq!(
                TURN_TABLE[reduced_id(CellColor::White, heading) as usize],
                heading.turn_right()
            );
            assert_eq!(
                TURN_TABLE[reduced_id(CellColor::Black, heading) as usize],
                heading.turn_left()
            );
        }
    }

    #[test]
    fn test_first_step() {
        let mut grid = Grid::new(8);
        let mut walker = Walker::new(WalkerState::centered(8));

        let outcome = walker.step(&mut grid, 0).unwrap();
        assert_eq!(decode(outcome.move_id.reduced), Some((CellColor::White, Heading::North)));
        assert_eq!(outcome.color_after_flip, CellColor::Black);
        assert_eq!(outcome.black_delta, 1);
        assert_eq!(walker.state(), WalkerState::new(4, 5, Heading::East));
        assert_eq!(grid.color(4, 4), CellColor::Black);
    }

    #[test]
    fn test_first_four_steps_close_a_square() {
        let mut grid = Grid::new(8);
        let mut walker = Walker::new(WalkerState::centered(8));
        for i in 0..4 {
            walker.step(&mut grid, i).unwrap();
        }
        // Four right turns on white cells bring the ant home.
        assert_eq!(walker.state(), WalkerState::new(4, 4, Heading::North));
        assert_eq!(grid.count_black(), 4);

        // Fifth step lands on black: turn left.
        let outcome = walker.step(&mut grid, 4).unwrap();
        assert_eq!(outcome.black_delta, -1);
        assert_eq!(walker.state(), WalkerState::new(4, 3, Heading::West));
    }

    #[test]
    fn test_leaving_grid_is_an_error() {
        let mut grid = Grid::new(2);
        let mut walker = Walker::new(WalkerState::new(0, 1, Heading::North));
        let err = walker.step(&mut grid, 7).unwrap_err();
        assert_eq!(
            err,
            HighwayError::GridExceeded {
                row: 0,
                col: 2,
                side: 2,
                move_index: 7
            }
        );
    }
}
