use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// Board dimensions and mine count, fixed for the lifetime of a game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Enforces `0 < mines < rows * cols`: a board with no mines or no safe
    /// cell cannot be played to a meaningful outcome.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidConfig);
        }
        if mines == 0 || mines >= mult(rows, cols) {
            return Err(GameError::InvalidConfig);
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

/// The fixed, hidden subset of cells containing mines for one game instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout from explicit mine positions. Out-of-bounds positions
    /// and duplicates are rejected.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            let cell = &mut mine_mask[coords.to_nd_index()];
            if *cell {
                return Err(GameError::InvalidConfig);
            }
            *cell = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        let (rows, cols) = self.size();
        GameConfig::new_unchecked(rows, cols, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mine_mask.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Number of mines among the up-to-8 neighbors of `coords`. Pure function
    /// of the layout; reveal state never affects it.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size())
            .filter(|&pos| self[pos])
            .count()
            .try_into()
            .unwrap()
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_mines() {
        assert_eq!(GameConfig::new(2, 2, 0), Err(GameError::InvalidConfig));
    }

    #[test]
    fn config_rejects_full_board() {
        assert_eq!(GameConfig::new(3, 3, 9), Err(GameError::InvalidConfig));
        assert_eq!(GameConfig::new(3, 3, 10), Err(GameError::InvalidConfig));
    }

    #[test]
    fn config_rejects_empty_dimensions() {
        assert_eq!(GameConfig::new(0, 5, 1), Err(GameError::InvalidConfig));
        assert_eq!(GameConfig::new(5, 0, 1), Err(GameError::InvalidConfig));
    }

    #[test]
    fn config_accepts_reference_board() {
        let config = GameConfig::new(5, 5, 5).unwrap();
        assert_eq!(config.size(), (5, 5));
        assert_eq!(config.total_cells(), 25);
    }

    #[test]
    fn layout_rejects_out_of_bounds_mines() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn layout_rejects_duplicate_mines() {
        assert_eq!(
            MineLayout::from_mine_coords((3, 3), &[(1, 1), (1, 1)]),
            Err(GameError::InvalidConfig)
        );
    }

    #[test]
    fn adjacency_of_corner_opposite_to_mines_is_zero() {
        let layout = MineLayout::from_mine_coords((5, 5), &[(4, 4)]).unwrap();
        assert_eq!(layout.adjacent_mine_count((0, 0)), 0);
    }

    #[test]
    fn adjacency_counts_three_surrounding_mines() {
        let layout = MineLayout::from_mine_coords((5, 5), &[(0, 0), (0, 1), (1, 0)]).unwrap();
        assert_eq!(layout.adjacent_mine_count((1, 1)), 3);
    }

    #[test]
    fn adjacency_never_counts_the_cell_itself() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(1, 1)]).unwrap();
        assert_eq!(layout.adjacent_mine_count((1, 1)), 0);
        assert_eq!(layout.adjacent_mine_count((0, 0)), 1);
    }
}
