// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Move encoding.
//!
//! Each move is classified by two integers:
//!
//! - The **reduced id** combines the colour of the cell before it is flipped
//!   with the heading before the turn: `4 * colour + heading`, one of 8 values.
//!   It is the symbol of the alphabet the pattern detector scans.
//! - The **full id** adds the pre-move coordinates:
//!   `reduced + 8 * col + 8 * side * row`. Two moves that do the same thing at
//!   positions that differ by a fixed translation have a full-id difference
//!   that depends on the translation only. The detector compares these
//!   differences, never raw full ids.
//!
//! Both are pure functions of their inputs.

use crate::geometry::{CellColor, Heading};
use strum::EnumCount;

/// Number of distinct reduced ids.
pub const REDUCED_ID_COUNT: usize = CellColor::COUNT * Heading::COUNT;

/// The pair of ids for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveId {
    pub reduced: u8,
    pub full: u64,
}

/// Reduced id of a (colour, heading) pair.
pub fn reduced_id(color: CellColor, heading: Heading) -> u8 {
    (Heading::COUNT as u8) * color.bit() + heading.index()
}

/// Encode a move on a grid of the given side.
///
/// `color` is the cell colour before the flip and `heading` the heading
/// before the turn.
pub fn encode(color: CellColor, heading: Heading, row: usize, col: usize, side: usize) -> MoveId {
    let reduced = reduced_id(color, heading);
    let stride = REDUCED_ID_COUNT as u64;
    let full = reduced as u64 + stride * col as u64 + stride * side as u64 * row as u64;
    MoveId { reduced, full }
}

/// Inverse of [`reduced_id`]. Returns None for values outside `0..8`.
pub fn decode(reduced: u8) -> Option<(CellColor, Heading)> {
    if reduced as usize >= REDUCED_ID_COUNT {
        return None;
    }
    let count = Heading::COUNT as u8;
    let color = CellColor::from_black(reduced / count == 1);
    let heading = Heading::from_repr(reduced % count)?;
    Some((color, heading))
}

/// Split a full id back into (reduced, row, col).
pub fn decode_full(full: u64, side: usize) -> (u8, usize, usize) {
    let stride = REDUCED_ID_COUNT as u64;
    let reduced = (full % stride) as u8;
    let cell = full / stride;
    let side = side as u64;
    (reduced, (cell / side) as usize, (cell % side) as usize)
}
