// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cell colour.

use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// Colour of a grid cell. Every cell starts white.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumCountMacro, EnumIter, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum CellColor {
    #[default]
    White = 0,
    Black = 1,
}

impl CellColor {
    /// The colour bit used by the move encoder.
    pub fn bit(self) -> u8 {
        self as u8
    }

    pub fn from_black(is_black: bool) -> Self {
        if is_black {
            CellColor::Black
        } else {
            CellColor::White
        }
    }

    pub fn is_black(self) -> bool {
        self == CellColor::Black
    }

    pub fn flipped(self) -> Self {
        match self {
            CellColor::White => CellColor::Black,
            CellColor::Black => CellColor::White,
        }
    }
}
