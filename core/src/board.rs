use alloc::vec;
use ndarray::Array2;

use crate::*;

/// Authoritative state of one minefield: mine layout, revealed cells and flags.
///
/// Mines are placed lazily by the generator on the first [`Board::open`], using the opened cell
/// as the safe cell. Mutators silently ignore out-of-board coordinates, queries reject them.
#[derive(Clone, Debug)]
pub struct Board<G = RandomMineGenerator> {
    config: BoardConfig,
    generator: Option<G>,
    layout: MineLayout,
    revealed: Array2<bool>,
    flagged: Array2<bool>,
    closed_count: CellCount,
    flag_count: CellCount,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Board with randomly placed mines seeded from `seed`, protecting only the first opened cell.
    pub fn new(width: Coord, height: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        let config = BoardConfig::new(width, height, mines)?;
        Ok(Self::with_generator(
            config,
            RandomMineGenerator::new(seed, SafeZone::Cell),
        ))
    }

    /// Board whose mines are already placed, the first open is not guaranteed to be safe.
    pub fn from_layout(layout: MineLayout) -> Self {
        Self::with_state(layout.config(), None, layout)
    }
}

impl<G: MineGenerator> Board<G> {
    pub fn with_generator(config: BoardConfig, generator: G) -> Self {
        let empty = MineLayout::from_mine_mask_unchecked(Array2::default(config.size().to_nd_index()));
        Self::with_state(config, Some(generator), empty)
    }

    fn with_state(config: BoardConfig, generator: Option<G>, layout: MineLayout) -> Self {
        let index = config.size().to_nd_index();
        Self {
            config,
            generator,
            layout,
            revealed: Array2::default(index),
            flagged: Array2::default(index),
            closed_count: config.total_cells(),
            flag_count: 0,
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn closed_count(&self) -> CellCount {
        self.closed_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.config.mines()) - i64::from(self.flag_count)
    }

    pub fn mines_placed(&self) -> bool {
        self.generator.is_none()
    }

    /// The placed layout, all clear until the first open.
    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn in_board(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.config.size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.in_board(coords) {
            Ok(coords)
        } else {
            Err(BoardError::OutOfBounds { coords })
        }
    }

    pub fn is_mine(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.layout.contains_mine(coords))
    }

    pub fn is_flagged(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.flagged[coords.to_nd_index()])
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.revealed[coords.to_nd_index()])
    }

    /// Mined neighbors of a cell, [`MINE_SENTINEL`] when the cell itself is mined.
    pub fn neighbor_mine_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.layout.neighbor_mine_count(coords))
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.validate_coords(coords)?;
        let index = coords.to_nd_index();

        Ok(match (self.revealed[index], self.layout.contains_mine(coords)) {
            (true, true) => CellView::Mine,
            (true, false) => CellView::Revealed(self.layout.neighbor_mine_count(coords)),
            (false, _) if self.flagged[index] => CellView::Flagged,
            (false, _) => CellView::Hidden,
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.triggered_mine.is_some()
    }

    /// Every closed cell left is a mine.
    pub fn is_clear(&self) -> bool {
        self.closed_count == self.config.mines()
    }

    /// Opens a cell, cascading through zero-count neighbors.
    ///
    /// The first call places the mines with `coords` as the safe cell. Flags are not consulted,
    /// callers that want flagged cells protected must check [`Board::is_flagged`] first.
    pub fn open(&mut self, coords: Coord2) -> OpenOutcome {
        if !self.in_board(coords) || self.revealed[coords.to_nd_index()] {
            return OpenOutcome::NoChange;
        }

        if let Some(generator) = self.generator.take() {
            self.layout = self.checked_layout(generator.generate(self.config, coords), coords);
        }

        let opened = self.open_region(coords);
        log::trace!("Opened {} cells from {:?}", opened, coords);

        if self.layout.contains_mine(coords) {
            OpenOutcome::HitMine
        } else if self.is_clear() {
            OpenOutcome::Cleared
        } else {
            OpenOutcome::Opened
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        if !self.in_board(coords) {
            return FlagOutcome::NoChange;
        }

        let flagged = &mut self.flagged[coords.to_nd_index()];
        *flagged = !*flagged;
        if *flagged {
            self.flag_count += 1;
        } else {
            self.flag_count -= 1;
        }
        FlagOutcome::Changed
    }

    /// Keeps a generated layout only when it matches the board, otherwise places mines randomly.
    fn checked_layout(&self, layout: MineLayout, safe_cell: Coord2) -> MineLayout {
        if layout.config() == self.config {
            return layout;
        }

        log::warn!(
            "Generated layout mismatch, actual: {:?}, requested: {:?}, fallback to random placement",
            layout.config(),
            self.config
        );
        RandomMineGenerator::new(0, SafeZone::Cell).generate(self.config, safe_cell)
    }

    /// Reveals `start` and, through an explicit stack, every cell reachable over zero counts.
    fn open_region(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit = vec![start];

        while let Some(coords) = to_visit.pop() {
            let index = coords.to_nd_index();
            if self.revealed[index] {
                continue;
            }

            self.revealed[index] = true;
            self.closed_count -= 1;
            opened += 1;

            if self.layout.contains_mine(coords) {
                self.triggered_mine.get_or_insert(coords);
                continue;
            }

            if self.layout.neighbor_mine_count(coords) == 0 {
                let revealed = &self.revealed;
                to_visit.extend(
                    self.layout
                        .iter_neighbors(coords)
                        .filter(|pos| !revealed[pos.to_nd_index()]),
                );
            }
        }

        opened
    }
}
