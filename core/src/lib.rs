#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod layout;
mod types;

/// Validated board dimensions and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardConfigData")]
pub struct BoardConfig {
    size: Coord2,
    mines: CellCount,
}

/// Unvalidated wire form of [`BoardConfig`].
#[derive(Deserialize)]
struct BoardConfigData {
    size: Coord2,
    mines: CellCount,
}

impl TryFrom<BoardConfigData> for BoardConfig {
    type Error = BoardError;

    fn try_from(BoardConfigData { size, mines }: BoardConfigData) -> Result<Self> {
        Self::new(size.0, size.1, mines)
    }
}

impl BoardConfig {
    pub(crate) const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Fails unless both dimensions are positive and at least one cell stays free of mines.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(ConfigError::InvalidSize { width, height }.into());
        }

        let cells = mult(width, height);
        if mines >= cells {
            return Err(ConfigError::TooManyMines { mines, cells }.into());
        }

        Ok(Self::new_unchecked((width, height), mines))
    }

    /// The 10x8 field with 15 mines.
    pub const fn classic() -> Self {
        Self::new_unchecked((10, 8), 15)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked((9, 9), 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked((16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked((30, 16), 99)
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Outcome of toggling a flag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Outcome of opening a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    NoChange,
    Opened,
    HitMine,
    Cleared,
}

impl OpenOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use OpenOutcome::*;
        match self {
            NoChange => false,
            Opened => true,
            HitMine => true,
            Cleared => true,
        }
    }
}

/// Used to merge outcomes when opening several cells
impl BitOr for OpenOutcome {
    type Output = OpenOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use OpenOutcome::*;
        match (self, rhs) {
            // a hit mine has priority
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Cleared, _) => Cleared,
            (_, Cleared) => Cleared,
            (Opened, _) => Opened,
            (_, Opened) => Opened,
            (NoChange, NoChange) => NoChange,
        }
    }
}
