// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded square grid of black/white cells.

use super::CellColor;

/// A `side x side` grid, row-major, all cells white at construction.
///
/// The grid never grows. The walker checks [`Grid::contains`] before each
/// advance, so the side must exceed the ant's excursion for the horizon.
#[derive(Debug, Clone)]
pub struct Grid {
    side: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![false; side * side],
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Whether signed coordinates fall inside the grid.
    pub fn contains(&self, row: i64, col: i64) -> bool {
        let side = self.side as i64;
        (0..side).contains(&row) && (0..side).contains(&col)
    }

    /// Colour of the cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn color(&self, row: usize, col: usize) -> CellColor {
        CellColor::from_black(self.cells[self.offset(row, col)])
    }

    /// Flip the cell at (row, col), returning the colour after the flip.
    pub fn flip(&mut self, row: usize, col: usize) -> CellColor {
        let offset = self.offset(row, col);
        self.cells[offset] = !self.cells[offset];
        CellColor::from_black(self.cells[offset])
    }

    /// Number of black cells, by full scan. Used to cross-check the running count.
    pub fn count_black(&self) -> usize {
        self.cells.iter().filter(|&&black| black).count()
    }

    /// Coordinates of every black cell in row-major order.
    pub fn black_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, black)| **black)
            .map(move |(i, _)| (i / side, i % side))
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.side && col < self.side,
            "Cell ({}, {}) outside {}x{} grid",
            row,
            col,
            self.side,
            self.side
        );
        row * self.side + col
    }
}
