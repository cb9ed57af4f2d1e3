// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Primitive types of the ant's world:
//! - Heading: compass direction of the ant
//! - CellColor: black or white
//! - Grid: bounded square of cells

pub mod cell;
pub mod grid;
pub mod heading;

pub use cell::CellColor;
pub use grid::Grid;
pub use heading::Heading;
