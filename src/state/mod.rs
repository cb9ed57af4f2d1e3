// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-session bookkeeping that is not part of the ant's world.

pub mod statistics;

pub use statistics::{Counters, Statistics, StatisticsSnapshot};
