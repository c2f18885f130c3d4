use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Status of a game instance, derived from the mine layout and the reveal
/// mask on every query rather than stored as independent mutable state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game: a fixed mine layout plus a monotonic reveal mask. An explicitly
/// owned value; starting a new game means constructing a new instance, which
/// replaces the layout and reveal state with no carryover.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    mine_layout: MineLayout,
    revealed: Array2<bool>,
    revealed_safe: CellCount,
    triggered_mine: Option<Coord2>,
}

impl Game {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            mine_layout,
            revealed: Array2::default(size.to_nd_index()),
            revealed_safe: 0,
            triggered_mine: None,
        }
    }

    pub fn generate(config: GameConfig, generator: impl LayoutGenerator) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn outcome(&self) -> Outcome {
        if self.triggered_mine.is_some() {
            Outcome::Lost
        } else if self.revealed_safe == self.mine_layout.safe_cell_count() {
            Outcome::Won
        } else {
            Outcome::InProgress
        }
    }

    /// Uncovers a single cell and returns the resulting outcome.
    ///
    /// Revealing an already-revealed cell is a no-op that returns the current
    /// outcome. Revealing a mine marks only the pressed cell; the rest of the
    /// layout stays hidden. Moves after a terminal outcome are rejected with
    /// [`GameError::AlreadyOver`]. There is no cascade: a zero-adjacency cell
    /// reveals exactly itself.
    pub fn reveal(&mut self, coords: Coord2) -> Result<Outcome> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if self.outcome().is_over() {
            return Err(GameError::AlreadyOver);
        }

        if self.revealed[coords.to_nd_index()] {
            return Ok(self.outcome());
        }

        self.revealed[coords.to_nd_index()] = true;
        if self.mine_layout.contains_mine(coords) {
            self.triggered_mine = Some(coords);
        } else {
            self.revealed_safe += 1;
        }

        Ok(self.outcome())
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.revealed[coords.to_nd_index()])
    }

    pub fn cell_kind(&self, coords: Coord2) -> Result<CellKind> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(if self.mine_layout.contains_mine(coords) {
            CellKind::Mine
        } else {
            CellKind::Safe
        })
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.mine_layout.adjacent_mine_count(coords))
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_safe + CellCount::from(self.triggered_mine.is_some())
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }
}
