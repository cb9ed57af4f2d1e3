// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Black cells of Langton's ant after 10^18 moves.
//!
//! See <https://projecteuler.net/problem=349>.
//!
//! After roughly ten thousand chaotic moves the ant on an empty grid builds a
//! "highway": a 104-move motif repeated forever, each copy translated
//! diagonally. Once that motif is found the black count at any later move is a
//! closed-form expression, so the ant never has to walk 10^18 moves.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! 1. **encoding**: classify each move by a reduced id (colour and heading,
//!    8 values) and a full id (reduced id plus position)
//! 2. **walker**: flip, turn, advance on a bounded **geometry::Grid**
//! 3. **history**: append ids and black counts; index moves by reduced id
//! 4. **detect**: find a period that repeats the required number of times
//! 5. **extrapolate**: black count at the target from one recorded period
//!
//! A [`SimulationContext`] owns all buffers of one travel, and the
//! [`TravelEngine`] drives it under a [`TravelConfig`].
//!
//! # Assumption
//!
//! There is no proof that the ant keeps to the highway. A period repeated
//! `repeat_count` times after `detection_delay` moves is accepted as the
//! highway. Choosing these too small can accept an accidental repeat of the
//! chaotic phase and give a wrong answer without any error.

pub mod config;
pub mod context;
pub mod detect;
pub mod encoding;
pub mod engine;
pub mod error;
pub mod extrapolate;
pub mod geometry;
pub mod history;
pub mod state;
pub mod walker;

// Re-export commonly used types
pub use config::{DetectionMode, TravelConfig};
pub use context::SimulationContext;
pub use detect::Pattern;
pub use engine::{solve, Solution, SolveMethod, TravelEngine};
pub use error::HighwayError;
