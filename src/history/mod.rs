// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Move history.
//!
//! Append-only buffers indexed by move index, all allocated once at the
//! configured capacity:
//!
//! - reduced id of each move
//! - full id of each move
//! - cumulative black count after each move
//!
//! plus, for each reduced id, the ascending list of move indices where it
//! occurred. The occurrence lists let the detector jump to earlier moves with
//! the same symbol without scanning the whole history.

use crate::encoding::{MoveId, REDUCED_ID_COUNT};
use crate::error::{HighwayError, Result};

/// Recorded moves of one session.
#[derive(Debug, Clone)]
pub struct History {
    capacity: usize,
    reduced: Vec<u8>,
    full: Vec<u64>,
    black_counts: Vec<i64>,
    occurrences: [Vec<usize>; REDUCED_ID_COUNT],
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            reduced: Vec::with_capacity(capacity),
            full: Vec::with_capacity(capacity),
            black_counts: Vec::with_capacity(capacity),
            occurrences: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Append one move.
    ///
    /// # Panics
    ///
    /// Panics if `move_index` is not the next dense index.
    pub fn record(&mut self, move_index: usize, move_id: MoveId, black_count: i64) -> Result<()> {
        assert_eq!(
            move_index,
            self.len(),
            "Move indices must be dense: expected {}, got {}",
            self.len(),
            move_index
        );
        if move_index >= self.capacity {
            return Err(HighwayError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.reduced.push(move_id.reduced);
        self.full.push(move_id.full);
        self.black_counts.push(black_count);
        self.occurrences[move_id.reduced as usize].push(move_index);
        Ok(())
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.reduced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reduced.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn reduced(&self, move_index: usize) -> u8 {
        self.reduced[move_index]
    }

    pub fn full(&self, move_index: usize) -> u64 {
        self.full[move_index]
    }

    pub fn move_id(&self, move_index: usize) -> MoveId {
        MoveId {
            reduced: self.reduced[move_index],
            full: self.full[move_index],
        }
    }

    /// Black count right after move `move_index`.
    pub fn black_count_after(&self, move_index: usize) -> i64 {
        self.black_counts[move_index]
    }

    /// Black count once `moves` moves are done. Zero moves leave zero black cells.
    ///
    /// Returns None if fewer than `moves` moves are recorded.
    pub fn black_count_at(&self, moves: usize) -> Option<i64> {
        match moves {
            0 => Some(0),
            m => self.black_counts.get(m - 1).copied(),
        }
    }

    /// Move indices at which `reduced` occurred, oldest first.
    pub fn occurrences(&self, reduced: u8) -> &[usize] {
        &self.occurrences[reduced as usize]
    }

    /// The `k`-th most recent occurrence of `reduced` (`k = 0` is the latest).
    pub fn nth_latest_occurrence(&self, reduced: u8, k: usize) -> Option<usize> {
        let list = self.occurrences(reduced);
        list.len().checked_sub(k + 1).map(|p| list[p])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(reduced: u8, full: u64) -> MoveId {
        MoveId { reduced, full }
    }

    #[test]
    fn test_record_and_query() {
        let mut history = History::with_capacity(4);
        history.record(0, id(0, 100), 1).unwrap();
        history.record(1, id(1, 109), 2).unwrap();
        history.record(2, id(0, 116), 1).unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history.reduced(1), 1);
        assert_eq!(history.full(2), 116);
        assert_eq!(history.black_count_after(2), 1);
        assert_eq!(history.black_count_at(0), Some(0));
        assert_eq!(history.black_count_at(2), Some(2));
        assert_eq!(history.black_count_at(4), None);
        assert_eq!(history.occurrences(0), &[0, 2]);
        assert!(history.occurrences(5).is_empty());
    }

    #[test]
    fn test_nth_latest_occurrence() {
        let mut history = History::with_capacity(8);
        for i in 0..5 {
            history.record(i, id((i % 2) as u8, i as u64), 0).unwrap();
        }
        assert_eq!(history.nth_latest_occurrence(0, 0), Some(4));
        assert_eq!(history.nth_latest_occurrence(0, 2), Some(0));
        assert_eq!(history.nth_latest_occurrence(0, 3), None);
        assert_eq!(history.nth_latest_occurrence(7, 0), None);
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut history = History::with_capacity(1);
        history.record(0, id(0, 0), 1).unwrap();
        assert_eq!(
            history.record(1, id(0, 8), 0),
            Err(HighwayError::CapacityExceeded { capacity: 1 })
        );
        assert_eq!(history.len(), 1);
    }

    #[test]
    #[should_panic(expected = "Move indices must be dense")]
    fn test_sparse_index_panics() {
        let mut history = History::with_capacity(4);
        let _ = history.record(1, id(0, 0), 1);
    }
}
