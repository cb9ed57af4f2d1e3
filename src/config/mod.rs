// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Travel configuration.
//!
//! | Field | Role | Default |
//! |---|---|---|
//! | `grid_side` | side of the square grid (Z) | 512 |
//! | `horizon` | move ceiling of the travel (P2) | 30000 |
//! | `history_capacity` | size of the history buffers | `horizon` |
//! | `detection_delay` | first move index eligible for detection (P1) | 10000 |
//! | `detection_cadence` | detect once every this many moves (w) | 100 |
//! | `repeat_count` | required repeats of a period (n) | 10 |
//! | `start` | initial position and heading | grid centre, north |
//! | `target_moves` | move count to answer for (N) | 10^18 |
//! | `mode` | online or offline detection | online |
//!
//! The defaults are known to find the highway of the ant started on an empty
//! grid. Lowering `detection_delay` or `repeat_count` risks accepting an
//! accidental repeat from the chaotic phase.

use crate::error::{HighwayError, Result};
use crate::geometry::Heading;
use crate::walker::WalkerState;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

pub const DEFAULT_GRID_SIDE: usize = 512;
pub const DEFAULT_HORIZON: usize = 30_000;
pub const DEFAULT_DETECTION_DELAY: usize = 10_000;
pub const DEFAULT_DETECTION_CADENCE: usize = 100;
pub const DEFAULT_REPEAT_COUNT: usize = 10;
pub const DEFAULT_TARGET_MOVES: u64 = 1_000_000_000_000_000_000;

/// When detection runs relative to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMode {
    /// Detect while walking, every `detection_cadence` moves after the delay.
    /// Stops as soon as a period is accepted.
    #[default]
    Online,
    /// Walk the whole horizon, then detect from the newest move backward.
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelConfig {
    pub grid_side: usize,
    pub horizon: usize,
    pub history_capacity: Option<usize>,
    pub detection_delay: usize,
    pub detection_cadence: usize,
    pub repeat_count: usize,
    pub start: Option<WalkerState>,
    pub target_moves: u64,
    pub mode: DetectionMode,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            grid_side: DEFAULT_GRID_SIDE,
            horizon: DEFAULT_HORIZON,
            history_capacity: None,
            detection_delay: DEFAULT_DETECTION_DELAY,
            detection_cadence: DEFAULT_DETECTION_CADENCE,
            repeat_count: DEFAULT_REPEAT_COUNT,
            start: None,
            target_moves: DEFAULT_TARGET_MOVES,
            mode: DetectionMode::Online,
        }
    }
}

impl TravelConfig {
    pub fn builder() -> TravelConfigBuilder {
        TravelConfigBuilder::new()
    }

    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TravelConfig =
            serde_json::from_str(json).map_err(|e| HighwayError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Buffer size for the history.
    pub fn capacity(&self) -> usize {
        self.history_capacity.unwrap_or(self.horizon)
    }

    /// Initial ant state; the grid centre facing north unless set.
    pub fn start_state(&self) -> WalkerState {
        self.start
            .unwrap_or_else(|| WalkerState::centered(self.grid_side))
    }

    /// Reject configurations that cannot run at all.
    ///
    /// A capacity below the horizon is accepted here: the travel reports
    /// [`HighwayError::CapacityExceeded`] when it runs out.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(HighwayError::InvalidConfig(msg));
        if self.grid_side == 0 {
            return invalid("grid side must be positive".into());
        }
        if self.horizon == 0 {
            return invalid("horizon must be positive".into());
        }
        if self.detection_cadence == 0 {
            return invalid("detection cadence must be positive".into());
        }
        if self.repeat_count == 0 {
            return invalid("repeat count must be positive".into());
        }
        let start = self.start_state();
        if start.row >= self.grid_side || start.col >= self.grid_side {
            return invalid(format!(
                "start ({}, {}) outside {}x{} grid",
                start.row, start.col, self.grid_side, self.grid_side
            ));
        }
        Ok(())
    }
}

/// Builder for [`TravelConfig`], starting from the defaults.
///
/// ```
/// use langton_highway::config::TravelConfig;
///
/// let config = TravelConfig::builder()
///     .grid_side(128)
///     .horizon(2_000)
///     .target_moves(1_000)
///     .build()
///     .unwrap();
/// assert_eq!(config.capacity(), 2_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TravelConfigBuilder {
    config: TravelConfig,
}

impl TravelConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid_side(mut self, side: usize) -> Self {
        self.config.grid_side = side;
        self
    }

    pub fn horizon(mut self, moves: usize) -> Self {
        self.config.horizon = moves;
        self
    }

    pub fn history_capacity(mut self, moves: usize) -> Self {
        self.config.history_capacity = Some(moves);
        self
    }

    pub fn detection_delay(mut self, moves: usize) -> Self {
        self.config.detection_delay = moves;
        self
    }

    pub fn detection_cadence(mut self, moves: usize) -> Self {
        self.config.detection_cadence = moves;
        self
    }

    pub fn repeat_count(mut self, repeats: usize) -> Self {
        self.config.repeat_count = repeats;
        self
    }

    pub fn start(mut self, row: usize, col: usize, heading: Heading) -> Self {
        self.config.start = Some(WalkerState::new(row, col, heading));
        self
    }

    pub fn target_moves(mut self, moves: u64) -> Self {
        self.config.target_moves = moves;
        self
    }

    pub fn mode(mut self, mode: DetectionMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<TravelConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let config = TravelConfig::default();
        assert_eq!(config.capacity(), 30_000);
        assert_eq!(config.start_state(), WalkerState::new(256, 256, Heading::North));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = TravelConfig::builder()
            .grid_side(64)
            .history_capacity(10)
            .start(1, 2, Heading::South)
            .mode(DetectionMode::Offline)
            .build()
            .unwrap();
        assert_eq!(config.capacity(), 10);
        assert_eq!(config.start_state(), WalkerState::new(1, 2, Heading::South));
        assert_eq!(config.mode, DetectionMode::Offline);
    }

    #[test]
    fn test_rejects_zero_cadence() {
        let err = TravelConfig::builder().detection_cadence(0).build().unwrap_err();
        assert!(matches!(err, HighwayError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_start_outside_grid() {
        let err = TravelConfig::builder()
            .grid_side(8)
            .start(8, 0, Heading::North)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            HighwayError::InvalidConfig("start (8, 0) outside 8x8 grid".into())
        );
    }

    #[test]
    fn test_json_partial() {
        let config =
            TravelConfig::from_json_str(r#"{"grid_side": 100, "mode": "offline"}"#).unwrap();
        assert_eq!(config.grid_side, 100);
        assert_eq!(config.mode, DetectionMode::Offline);
        assert_eq!(config.repeat_count, DEFAULT_REPEAT_COUNT);
    }

    #[test]
    fn test_json_rejects_garbage() {
        assert!(matches!(
            TravelConfig::from_json_str("{"),
            Err(HighwayError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(DetectionMode::from_str("OFFLINE"), Ok(DetectionMode::Offline));
        assert_eq!(DetectionMode::Online.to_string(), "online");
    }
}
