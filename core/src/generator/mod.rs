use crate::*;
pub use random::*;

mod random;

/// Deferred mine placement, run once when the first cell of a board is opened.
pub trait MineGenerator {
    fn generate(self, config: BoardConfig, safe_cell: Coord2) -> MineLayout;
}

/// Cells around the first opened cell that are guaranteed to be free of mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SafeZone {
    /// Only the opened cell itself.
    #[default]
    Cell,
    /// The opened cell and its 8 neighbors, so the first open always cascades.
    Neighborhood,
}
