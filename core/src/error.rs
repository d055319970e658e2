use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

/// Rejected board construction parameters.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board dimensions must be positive, got {width}x{height}")]
    InvalidSize { width: Coord, height: Coord },
    #[error("Board dimensions must not exceed {max} cells per side")]
    TooLarge { max: Coord },
    #[error("Too many mines: {mines} requested but the board only has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid board configuration: {0}")]
    Configuration(#[from] ConfigError),
    #[error("Coordinates {coords:?} are outside the board")]
    OutOfBounds { coords: Coord2 },
}

pub type Result<T> = core::result::Result<T, BoardError>;
