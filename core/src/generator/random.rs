use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Purely random placement by rejection sampling, keeping the configured safe zone free.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
    safe_zone: SafeZone,
}

impl RandomMineGenerator {
    pub fn new(seed: u64, safe_zone: SafeZone) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed), safe_zone)
    }

    pub fn from_rng(rng: SmallRng, safe_zone: SafeZone) -> Self {
        Self { rng, safe_zone }
    }

    pub fn safe_zone(&self) -> SafeZone {
        self.safe_zone
    }

    fn protected_cells(&self, config: BoardConfig, safe_cell: Coord2) -> Array2<bool> {
        let mut protected: Array2<bool> = Array2::default(config.size().to_nd_index());
        protected[safe_cell.to_nd_index()] = true;

        if self.safe_zone == SafeZone::Neighborhood {
            let zone = protected.iter_neighbors(safe_cell).count() as CellCount + 1;
            if config.mines() + zone > config.total_cells() {
                log::warn!(
                    "Cannot keep the neighborhood of {:?} free of {} mines, fallback to the single cell",
                    safe_cell,
                    config.mines()
                );
            } else {
                for pos in protected.iter_neighbors(safe_cell) {
                    protected[pos.to_nd_index()] = true;
                }
            }
        }

        protected
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(mut self, config: BoardConfig, safe_cell: Coord2) -> MineLayout {
        let protected = self.protected_cells(config, safe_cell);
        let (size_x, size_y) = config.size();
        let mut free_cells =
            config.total_cells() - protected.iter().filter(|&&is_safe| is_safe).count() as CellCount;

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut placed: CellCount = 0;
        let mut rejected: u64 = 0;
        while placed < config.mines() {
            if free_cells == 0 {
                log::warn!(
                    "Minefield already full, placed {} of {} requested mines",
                    placed,
                    config.mines()
                );
                break;
            }
            let candidate: Coord2 = (
                self.rng.random_range(0..size_x),
                self.rng.random_range(0..size_y),
            );
            let index = candidate.to_nd_index();
            if protected[index] || mine_mask[index] {
                rejected += 1;
                continue;
            }
            mine_mask[index] = true;
            placed += 1;
            free_cells -= 1;
        }

        log::debug!(
            "Placed {} mines around safe cell {:?} ({} samples rejected)",
            placed,
            safe_cell,
            rejected
        );
        MineLayout::from_mine_mask_unchecked(mine_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: Coord, height: Coord, mines: CellCount) -> BoardConfig {
        BoardConfig::new(width, height, mines).unwrap()
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let config = config(16, 16, 40);
        let a = RandomMineGenerator::new(7, SafeZone::Cell).generate(config, (3, 4));
        let b = RandomMineGenerator::new(7, SafeZone::Cell).generate(config, (3, 4));

        assert_eq!(a, b);
    }

    #[test]
    fn places_exact_count_and_skips_safe_cell() {
        for seed in 0..64 {
            let layout =
                RandomMineGenerator::new(seed, SafeZone::Cell).generate(config(10, 8, 15), (9, 7));

            assert_eq!(layout.mine_count(), 15);
            assert!(!layout.contains_mine((9, 7)));
        }
    }

    #[test]
    fn nearly_full_board_leaves_only_safe_cell() {
        let layout = RandomMineGenerator::new(1, SafeZone::Cell).generate(config(3, 3, 8), (1, 1));

        assert_eq!(layout.mine_count(), 8);
        assert!(!layout.contains_mine((1, 1)));
    }

    #[test]
    fn neighborhood_zone_keeps_first_open_at_zero() {
        for seed in 0..64 {
            let generator = RandomMineGenerator::new(seed, SafeZone::Neighborhood);
            let layout = generator.generate(config(9, 9, 10), (0, 0));

            assert_eq!(layout.mine_count(), 10);
            assert_eq!(layout.neighbor_mine_count((0, 0)), 0);
        }
    }

    #[test]
    fn neighborhood_zone_falls_back_when_it_cannot_fit() {
        let layout =
            RandomMineGenerator::new(3, SafeZone::Neighborhood).generate(config(3, 3, 5), (1, 1));

        assert_eq!(layout.mine_count(), 5);
        assert!(!layout.contains_mine((1, 1)));
    }

    #[test]
    fn stops_when_no_free_cell_is_left() {
        let full = BoardConfig::new_unchecked((2, 2), 4);
        let layout = RandomMineGenerator::new(1, SafeZone::Cell).generate(full, (0, 0));

        assert_eq!(layout.mine_count(), 3);
        assert!(!layout.contains_mine((0, 0)));
    }

    #[test]
    fn mines_reach_last_row_and_column() {
        let config = config(4, 4, 15);
        let layout = RandomMineGenerator::new(11, SafeZone::Cell).generate(config, (0, 0));

        assert!(layout.contains_mine((3, 3)));
    }
}
