// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compass heading of the ant.

use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, EnumString, FromRepr};

/// One of the four compass headings.
///
/// The discriminant is the heading index used by the move encoder, so the
/// order North, East, South, West is load-bearing. Rows grow southward and
/// columns grow eastward.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumCountMacro,
    EnumIter,
    EnumString,
    FromRepr,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Heading {
    #[strum(serialize = "north", serialize = "n")]
    North = 0,
    #[strum(serialize = "east", serialize = "e")]
    East = 1,
    #[strum(serialize = "south", serialize = "s")]
    South = 2,
    #[strum(serialize = "west", serialize = "w")]
    West = 3,
}

impl Heading {
    /// Index in `0..4`.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Heading after a clockwise quarter turn.
    pub fn turn_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Heading after a counter-clockwise quarter turn.
    pub fn turn_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// (row, col) offset of one step in this heading.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }
}
