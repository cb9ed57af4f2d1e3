// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in the context and incremented by the engine.

use serde::{Deserialize, Serialize};
use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    MovesSimulated,
    DetectionAttempts,
    CandidatesExamined,
    CandidatesRejected,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn snapshot(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            moves_simulated: self.get(Counters::MovesSimulated),
            detection_attempts: self.get(Counters::DetectionAttempts),
            candidates_examined: self.get(Counters::CandidatesExamined),
            candidates_rejected: self.get(Counters::CandidatesRejected),
        }
    }
}

/// Plain copy of the counters for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub moves_simulated: u64,
    pub detection_attempts: u64,
    pub candidates_examined: u64,
    pub candidates_rejected: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(stats.get(counter), 0);
        }
    }

    #[test]
    fn test_increment_and_snapshot() {
        let mut stats = Statistics::new();
        stats.increment(Counters::DetectionAttempts);
        stats.add(Counters::MovesSimulated, 30);
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.moves_simulated, 30);
        assert_eq!(snapshot.detection_attempts, 1);
        assert_eq!(snapshot.candidates_rejected, 0);
    }

    #[test]
    fn test_counter_names() {
        let name: &'static str = Counters::CandidatesExamined.into();
        assert_eq!(name, "candidates_examined");
    }
}
