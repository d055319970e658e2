use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Final mine placement of a board together with the neighbor counts derived from it.
///
/// Only the mine mask is serialized, counts are recomputed and validated on the way back in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MineMaskData", into = "MineMaskData")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    neighbor_counts: Array2<u8>,
    mine_count: CellCount,
}

#[derive(Serialize, Deserialize)]
struct MineMaskData {
    mine_mask: Array2<bool>,
}

impl TryFrom<MineMaskData> for MineLayout {
    type Error = BoardError;

    fn try_from(data: MineMaskData) -> Result<Self> {
        Self::from_mine_mask(data.mine_mask)
    }
}

impl From<MineLayout> for MineMaskData {
    fn from(layout: MineLayout) -> Self {
        Self {
            mine_mask: layout.mine_mask,
        }
    }
}

impl MineLayout {
    /// Fails unless the mask has a valid board shape and leaves at least one cell free.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (dim_x, dim_y) = mine_mask.dim();
        let (Ok(width), Ok(height)) = (Coord::try_from(dim_x), Coord::try_from(dim_y)) else {
            return Err(ConfigError::TooLarge { max: Coord::MAX }.into());
        };

        let layout = Self::from_mine_mask_unchecked(mine_mask);
        BoardConfig::new(width, height, layout.mine_count)?;
        Ok(layout)
    }

    /// Callers guarantee the mask has the shape of a validated [`BoardConfig`].
    pub(crate) fn from_mine_mask_unchecked(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        let neighbor_counts = Array2::from_shape_fn(mine_mask.dim(), |(x, y)| {
            if mine_mask[(x, y)] {
                MINE_SENTINEL
            } else {
                mine_mask
                    .iter_neighbors((x as Coord, y as Coord))
                    .filter(|&pos| mine_mask[pos.to_nd_index()])
                    .count() as u8
            }
        });

        Self {
            mine_mask,
            neighbor_counts,
            mine_count,
        }
    }

    /// Builds a layout from explicit mine positions, duplicates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let (width, height) = size;
        if width <= 0 || height <= 0 {
            return Err(ConfigError::InvalidSize { width, height }.into());
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(BoardError::OutOfBounds { coords });
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mine_mask.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Number of mined neighbors, or [`MINE_SENTINEL`] on a mined cell.
    pub fn neighbor_mine_count(&self, coords: Coord2) -> u8 {
        self.neighbor_counts[coords.to_nd_index()]
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}
