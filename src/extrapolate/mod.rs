// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Closed-form black count across a detected period.
//!
//! With `B(m)` the black count after `m` recorded moves, a pattern starting at
//! `s` with length `L`, and a target of `N` moves:
//!
//! ```text
//! q   = (N - s) / L
//! rem = (N - s) % L
//! B(N) = B(s) + q * (B(s + L) - B(s)) + (B(s + rem) - B(s))
//! ```
//!
//! Targets inside the recorded history are answered from the history itself.

use crate::detect::Pattern;
use crate::error::{HighwayError, Result};
use crate::history::History;

/// Net change of the black count over one period.
///
/// # Panics
///
/// Panics if the period is not fully recorded.
pub fn period_black_delta(history: &History, pattern: &Pattern) -> i64 {
    let before = recorded(history, pattern.start);
    let after = recorded(history, pattern.next_start());
    after - before
}

/// Black count after `total_moves` moves.
///
/// # Panics
///
/// Panics if the pattern reaches past the recorded history.
pub fn black_count_at(history: &History, total_moves: u64, pattern: &Pattern) -> Result<u64> {
    if let Some(count) = usize::try_from(total_moves)
        .ok()
        .and_then(|m| history.black_count_at(m))
    {
        return u64::try_from(count).map_err(|_| HighwayError::ArithmeticOverflow);
    }

    let start = pattern.start as u64;
    let len = pattern.len() as u64;
    // total_moves is past the recorded history, hence past the pattern start.
    let highway = total_moves - start;
    let periods = highway / len;
    let remainder = (highway % len) as usize;

    let prefix = recorded(history, pattern.start);
    let delta = period_black_delta(history, pattern);
    let tail = recorded(history, pattern.start + remainder) - prefix;

    let total = prefix as i128 + periods as i128 * delta as i128 + tail as i128;
    u64::try_from(total).map_err(|_| HighwayError::ArithmeticOverflow)
}

fn recorded(history: &History, moves: usize) -> i64 {
    match history.black_count_at(moves) {
        Some(count) => count,
        None => panic!(
            "Pattern needs {} recorded moves, history has {}",
            moves,
            history.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::MoveId;

    /// 3 chaotic moves reaching 3 black cells, then a period of 4 moves
    /// adding +1, +1, -1, +1, repeated 3 times.
    fn sample_history() -> History {
        let deltas: [i64; 15] = [1, 1, 1, 1, 1, -1, 1, 1, 1, -1, 1, 1, 1, -1, 1];
        let mut history = History::with_capacity(deltas.len());
        let mut count = 0;
        for (i, &d) in deltas.iter().enumerate() {
            count += d;
            history.record(i, MoveId { reduced: 0, full: i as u64 }, count).unwrap();
        }
        history
    }

    #[test]
    fn test_recorded_targets_use_history() {
        let history = sample_history();
        let pattern = Pattern::new(3, 6);
        assert_eq!(black_count_at(&history, 0, &pattern), Ok(0));
        assert_eq!(black_count_at(&history, 7, &pattern), Ok(5));
        assert_eq!(black_count_at(&history, 15, &pattern), Ok(9));
    }

    #[test]
    fn test_extrapolation_matches_recorded_continuation() {
        let history = sample_history();
        let pattern = Pattern::new(3, 6);
        assert_eq!(period_black_delta(&history, &pattern), 2);

        // Build a history only covering one period and predict the rest.
        let mut short = History::with_capacity(7);
        for i in 0..7 {
            short.record(i, history.move_id(i), history.black_count_after(i)).unwrap();
        }
        for moves in 7..=15u64 {
            let expected = history.black_count_at(moves as usize).unwrap() as u64;
            assert_eq!(black_count_at(&short, moves, &pattern), Ok(expected), "moves {}", moves);
        }
    }

    #[test]
    fn test_one_period_after_start() {
        let history = sample_history();
        let pattern = Pattern::new(3, 6);
        let at_start = black_count_at(&history, pattern.start as u64, &pattern).unwrap();
        let after = black_count_at(&history, pattern.end as u64 + 1, &pattern).unwrap();
        assert_eq!(after as i64, at_start as i64 + period_black_delta(&history, &pattern));
    }

    #[test]
    fn test_end_uses_no_whole_period() {
        let history = sample_history();
        let pattern = Pattern::new(3, 6);
        assert_eq!(
            black_count_at(&history, pattern.end as u64, &pattern),
            Ok(history.black_count_at(pattern.end).unwrap() as u64)
        );
    }

    #[test]
    fn test_huge_target() {
        let history = sample_history();
        let pattern = Pattern::new(3, 6);
        // 3 + 2 * (10^18 - 3) / 4 periods, remainder 1 move (+1).
        let n = 1_000_000_000_000_000_000u64;
        let periods = (n - 3) / 4;
        let expected = 3 + 2 * periods + 1;
        assert_eq!(black_count_at(&history, n, &pattern), Ok(expected));
    }

    #[test]
    fn test_negative_drift_overflows() {
        let deltas: [i64; 4] = [1, 1, -1, -1];
        let mut history = History::with_capacity(4);
        let mut count = 0;
        for (i, &d) in deltas.iter().enumerate() {
            count += d;
            history.record(i, MoveId { reduced: 0, full: 0 }, count).unwrap();
        }
        // A one-move period at move 2 loses a cell each time.
        let pattern = Pattern::new(2, 2);
        assert_eq!(
            black_count_at(&history, 1_000, &pattern),
            Err(HighwayError::ArithmeticOverflow)
        );
    }
}
