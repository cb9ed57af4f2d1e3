// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

/// Unbounded reference ant on a set of black cells.
///
/// Written independently of the crate: plain (row, col) pairs, a direction
/// index into `DIRECTIONS`, and the textbook rule (white: turn right,
/// black: turn left, flip, step).
#[derive(Debug, Clone)]
pub struct BruteForceAnt {
    pub black: HashSet<(i64, i64)>,
    pub row: i64,
    pub col: i64,
    pub direction: usize,
}

/// North, east, south, west as (row, col) offsets.
const DIRECTIONS: [(i64, i64); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

impl BruteForceAnt {
    pub fn new(row: i64, col: i64, direction: usize) -> Self {
        Self {
            black: HashSet::new(),
            row,
            col,
            direction,
        }
    }

    pub fn step(&mut self) {
        let cell = (self.row, self.col);
        if self.black.remove(&cell) {
            self.direction = (self.direction + 3) % 4;
        } else {
            self.black.insert(cell);
            self.direction = (self.direction + 1) % 4;
        }
        let (dr, dc) = DIRECTIONS[self.direction];
        self.row += dr;
        self.col += dc;
    }

    pub fn run(&mut self, moves: usize) {
        for _ in 0..moves {
            self.step();
        }
    }

    pub fn black_count(&self) -> usize {
        self.black.len()
    }
}

/// Black count after `moves` moves from an empty grid.
pub fn brute_force_count(moves: usize) -> usize {
    let mut ant = BruteForceAnt::new(0, 0, 0);
    ant.run(moves);
    ant.black_count()
}
