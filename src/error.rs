// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the highway travel.

use thiserror::Error;

/// Errors that can end a travel.
///
/// Only [`HighwayError::DetectionFailed`] is recoverable: re-run with a longer
/// horizon, a later detection delay, or a different repeat count. The others
/// mean the configuration cannot host the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighwayError {
    /// History buffers are full; the horizon is larger than the capacity.
    #[error("history capacity of {capacity} moves exceeded")]
    CapacityExceeded { capacity: usize },

    /// The ant walked off the grid.
    #[error("move {move_index} left the {side}x{side} grid at row {row}, col {col}")]
    GridExceeded {
        row: i64,
        col: i64,
        side: usize,
        move_index: usize,
    },

    /// No pattern repeated often enough within the horizon.
    #[error("no highway pattern detected within {moves} moves")]
    DetectionFailed { moves: usize },

    /// Configuration was rejected before any simulation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Extrapolated count does not fit an unsigned 64-bit integer.
    #[error("extrapolated black count overflows u64")]
    ArithmeticOverflow,
}

impl HighwayError {
    /// Whether the caller may retry with larger limits.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, HighwayError::DetectionFailed { .. })
    }
}

pub type Result<T> = std::result::Result<T, HighwayError>;
