// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Highway pattern detection.
//!
//! The reduced ids form a string over an 8-letter alphabet. If the ant is on
//! the highway, the string ends in many copies of the same motif. Let `a` be
//! the symbol of the current move. Every earlier occurrence `j` of `a`
//! proposes a period `L = current - j`; the proposal holds if the `L` moves
//! starting at `j` are repeated by each of the `n` windows of `L` moves before
//! them, up to a translation of the whole window.
//!
//! Candidates are tried newest first, so the shortest period wins. Only
//! occurrences with at least `n` older occurrences are candidates.
//!
//! A window "repeats" another when the reduced ids at offset 0 agree and the
//! full-id difference of corresponding moves is the same at every offset. The
//! full id packs the reduced id into its low 3 bits, so a constant difference
//! that is a multiple of 8 at offset 0 keeps the reduced ids equal everywhere.
//!
//! Accidental repeats during the chaotic phase are not ruled out. The
//! detection delay and the repeat count are the only guard.

use crate::history::History;
use serde::{Deserialize, Serialize};

/// One period of the highway: moves `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub start: usize,
    pub end: usize,
}

impl Pattern {
    /// # Panics
    ///
    /// Panics if `end < start`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "Empty pattern: start {} > end {}", start, end);
        Self { start, end }
    }

    /// Period length in moves.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// First move after one period.
    pub fn next_start(&self) -> usize {
        self.end + 1
    }
}

/// Counters for one or more scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanTally {
    pub candidates_examined: u64,
    pub candidates_rejected: u64,
}

/// Look for a period ending right before `current`.
///
/// Returns None if no candidate verifies, including when the symbol of
/// `current` has fewer than `repeat_count + 1` earlier occurrences.
///
/// # Panics
///
/// Panics if `current` is not a recorded move.
pub fn try_detect(history: &History, current: usize, repeat_count: usize) -> Option<Pattern> {
    scan(history, current, repeat_count, &mut ScanTally::default())
}

/// [`try_detect`], accumulating candidate counts into `tally`.
pub fn scan(
    history: &History,
    current: usize,
    repeat_count: usize,
    tally: &mut ScanTally,
) -> Option<Pattern> {
    let symbol = history.reduced(current);
    let occurrences = history.occurrences(symbol);
    // Position of `current` in its own occurrence list; older entries precede it.
    let position = occurrences.partition_point(|&m| m < current);

    for p in (repeat_count..position).rev() {
        let start = occurrences[p];
        let len = current - start;
        tally.candidates_examined += 1;

        // Older candidates only have longer periods and less room.
        if start < len * (repeat_count + 1) {
            tally.candidates_rejected += 1;
            break;
        }

        let repeated = (1..=repeat_count).all(|r| verify_window(history, start, start - r * len, len));
        if repeated {
            return Some(Pattern::new(start, start + len - 1));
        }
        tally.candidates_rejected += 1;
    }
    None
}

/// Whether the `len` moves from `earlier` repeat the `len` moves from `start`
/// up to a translation.
///
/// # Panics
///
/// Panics if either window reaches past the recorded history.
pub fn verify_window(history: &History, start: usize, earlier: usize, len: usize) -> bool {
    if len == 0 {
        return true;
    }
    if history.reduced(start) != history.reduced(earlier) {
        return false;
    }
    let base = full_delta(history, start, earlier);
    (1..len).all(|k| full_delta(history, start + k, earlier + k) == base)
}

fn full_delta(history: &History, a: usize, b: usize) -> i64 {
    history.full(a) as i64 - history.full(b) as i64
}
